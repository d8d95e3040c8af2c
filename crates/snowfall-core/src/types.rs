//! Geometry and surface sizing types

use std::ops::{Add, Mul};

/// A 2D point. Simulation positions are normalized to the surface, so
/// `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Move a fraction `t` of the way towards `target`
    pub fn approach(&self, target: &Self, t: f32) -> Self {
        Self {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }

    /// True when both coordinates lie in `[0, 1]`
    pub fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl Add for Point2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Output surface size in device pixels, plus the ratio used to get there
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(0, 0, 1.0)
    }
}

/// Host viewport as reported in logical (CSS) pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Device pixel dimensions for this viewport. A missing or nonsensical
    /// pixel ratio falls back to 1.
    pub fn dimensions(&self) -> Dimensions {
        let dpr = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        Dimensions {
            width: (self.width.max(0.0) * dpr).floor() as u32,
            height: (self.height.max(0.0) * dpr).floor() as u32,
            device_pixel_ratio: dpr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_approach() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 2.0);
        let mid = a.approach(&b, 0.5);
        assert!((mid.x - 0.5).abs() < 1e-6);
        assert!((mid.y - 1.0).abs() < 1e-6);
        assert!(mid.distance(&b) < a.distance(&b));
    }

    #[test]
    fn test_point_normalized() {
        assert!(Point2::new(0.0, 1.0).is_normalized());
        assert!(!Point2::new(-0.01, 0.5).is_normalized());
        assert!(!Point2::new(0.5, 1.2).is_normalized());
    }

    #[test]
    fn test_viewport_dimensions() {
        let dims = Viewport::new(800.0, 600.0, 2.0).dimensions();
        assert_eq!(dims.width, 1600);
        assert_eq!(dims.height, 1200);
        assert_eq!(dims.device_pixel_ratio, 2.0);

        let fractional = Viewport::new(801.0, 601.0, 1.5).dimensions();
        assert_eq!(fractional.width, 1201);
        assert_eq!(fractional.height, 901);
    }

    #[test]
    fn test_viewport_bad_ratio_falls_back() {
        let dims = Viewport::new(100.0, 50.0, 0.0).dimensions();
        assert_eq!(dims.device_pixel_ratio, 1.0);
        assert_eq!(dims.width, 100);
        let dims = Viewport::new(100.0, 50.0, f32::NAN).dimensions();
        assert_eq!(dims.device_pixel_ratio, 1.0);
    }
}
