//! Off-screen text rasterization contract

use crate::layout::TextLayout;
use snowfall_core::Result;

/// Single-channel coverage buffer, row-major, one byte per pixel
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AlphaMask {
    /// Fully transparent mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Composite `alpha` over a rectangle, clipped to the mask. Overlapping
    /// coverage keeps the stronger value.
    pub fn cover_rect(&mut self, x: i32, y: i32, w: u32, h: u32, alpha: u8) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        for py in y0..y1 {
            let row = py as usize * self.width as usize;
            for px in x0..x1 {
                let cell = &mut self.data[row + px as usize];
                *cell = (*cell).max(alpha);
            }
        }
    }

    /// Number of pixels with coverage above `threshold`
    pub fn count_above(&self, threshold: u8) -> usize {
        self.data.iter().filter(|&&a| a > threshold).count()
    }
}

/// Renders laid-out text into an alpha mask of the requested size.
///
/// Implementations report an error when the host cannot rasterize text
/// (no fonts, no off-screen context); callers treat that as a no-op.
pub trait GlyphRaster {
    fn rasterize(&mut self, layout: &TextLayout, width: u32, height: u32) -> Result<AlphaMask>;
}

impl<R: GlyphRaster + ?Sized> GlyphRaster for Box<R> {
    fn rasterize(&mut self, layout: &TextLayout, width: u32, height: u32) -> Result<AlphaMask> {
        (**self).rasterize(layout, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_rect_clips_to_bounds() {
        let mut mask = AlphaMask::new(4, 3);
        mask.cover_rect(-2, -1, 4, 3, 200);
        assert_eq!(mask.count_above(0), 4);
        assert_eq!(mask.get(0, 0), 200);
        assert_eq!(mask.get(1, 1), 200);
        assert_eq!(mask.get(2, 0), 0);

        mask.cover_rect(3, 2, 10, 10, 50);
        assert_eq!(mask.get(3, 2), 50);
        assert_eq!(mask.count_above(0), 5);
    }

    #[test]
    fn cover_rect_keeps_stronger_coverage() {
        let mut mask = AlphaMask::new(2, 2);
        mask.cover_rect(0, 0, 2, 2, 100);
        mask.cover_rect(0, 0, 1, 1, 40);
        assert_eq!(mask.get(0, 0), 100);
        mask.cover_rect(0, 0, 1, 1, 250);
        assert_eq!(mask.get(0, 0), 250);
    }

    #[test]
    fn out_of_bounds_reads_are_transparent() {
        let mask = AlphaMask::new(2, 2);
        assert_eq!(mask.get(5, 0), 0);
        assert_eq!(mask.get(0, 5), 0);
    }
}
