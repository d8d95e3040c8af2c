//! RGBA software canvas

use image::{Rgba, RgbaImage};
use snowfall_core::{Result, SnowError};
use snowfall_particles::{CircleInstance, Surface};
use std::path::Path;

/// Off-screen RGBA surface sized in device pixels
pub struct Canvas {
    image: RgbaImage,
    /// Fill colour for every circle
    color: [u8; 3],
}

impl Canvas {
    /// Transparent canvas drawing white circles
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            color: [0xFF, 0xFF, 0xFF],
        }
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Sum of alpha over all pixels, a cheap "how much is drawn" measure
    pub fn coverage(&self) -> u64 {
        self.image.pixels().map(|p| u64::from(p.0[3])).sum()
    }

    /// Copy of the canvas composited over an opaque background
    pub fn flatten(&self, background: [u8; 3]) -> RgbaImage {
        let mut out = RgbaImage::from_pixel(
            self.image.width(),
            self.image.height(),
            Rgba([background[0], background[1], background[2], 0xFF]),
        );
        for (x, y, src) in self.image.enumerate_pixels() {
            let a = f32::from(src.0[3]) / 255.0;
            if a <= 0.0 {
                continue;
            }
            let dst = out.get_pixel_mut(x, y);
            for c in 0..3 {
                let blended = f32::from(src.0[c]) * a + f32::from(dst.0[c]) * (1.0 - a);
                dst.0[c] = blended.round() as u8;
            }
        }
        out
    }

    /// Write the canvas as PNG, over `background` when given
    pub fn save_png(&self, path: impl AsRef<Path>, background: Option<[u8; 3]>) -> Result<()> {
        let path = path.as_ref();
        let result = match background {
            Some(bg) => self.flatten(bg).save(path),
            None => self.image.save(path),
        };
        result.map_err(|e| SnowError::ImageError(format!("{}: {e}", path.display())))?;
        log::debug!("[render] wrote {}", path.display());
        Ok(())
    }

    fn blend(&mut self, x: u32, y: u32, alpha: f32) {
        let color = self.color;
        let px = self.image.get_pixel_mut(x, y);
        let da = f32::from(px.0[3]) / 255.0;
        let out_a = alpha + da * (1.0 - alpha);
        if out_a <= 0.0 {
            return;
        }
        for c in 0..3 {
            let src = f32::from(color[c]) * alpha;
            let dst = f32::from(px.0[c]) * da * (1.0 - alpha);
            px.0[c] = ((src + dst) / out_a).round().clamp(0.0, 255.0) as u8;
        }
        px.0[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    fn fill_circle(&mut self, circle: &CircleInstance, global_alpha: f32) {
        let alpha = (circle.alpha * global_alpha).clamp(0.0, 1.0);
        let r = circle.radius;
        if alpha <= 0.0 || r <= 0.0 {
            return;
        }
        let [cx, cy] = circle.center;
        let (w, h) = (self.image.width() as f32, self.image.height() as f32);

        // One pixel of feathering on the edge
        let x0 = (cx - r - 1.0).floor().max(0.0);
        let y0 = (cy - r - 1.0).floor().max(0.0);
        let x1 = (cx + r + 1.0).ceil().min(w);
        let y1 = (cy + r + 1.0).ceil().min(h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for py in y0 as u32..y1 as u32 {
            for px in x0 as u32..x1 as u32 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let coverage = (r + 0.5 - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(px, py, alpha * coverage);
                }
            }
        }
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.image.dimensions() != (width, height) {
            self.image = RgbaImage::new(width, height);
        }
    }

    fn clear(&mut self) {
        for p in self.image.pixels_mut() {
            *p = Rgba([0, 0, 0, 0]);
        }
    }

    fn fill_circles(&mut self, circles: &[CircleInstance], global_alpha: f32) {
        for circle in circles {
            self.fill_circle(circle, global_alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(8, 4);
        assert_eq!(canvas.size(), (8, 4));
        assert_eq!(canvas.coverage(), 0);
    }

    #[test]
    fn circle_covers_centre_not_corners() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_circles(&[CircleInstance::new(10.0, 10.0, 4.0, 1.0)], 1.0);
        assert_eq!(canvas.pixel(10, 10), [255, 255, 255, 255]);
        assert_eq!(canvas.pixel(0, 0)[3], 0);
        assert_eq!(canvas.pixel(19, 19)[3], 0);
        // Edge pixels are partially covered
        assert!(canvas.pixel(13, 10)[3] > 0 && canvas.pixel(13, 10)[3] < 255);
    }

    #[test]
    fn global_alpha_scales_output() {
        let mut full = Canvas::new(20, 20);
        let mut faded = Canvas::new(20, 20);
        let circle = [CircleInstance::new(10.0, 10.0, 3.0, 0.8)];
        full.fill_circles(&circle, 1.0);
        faded.fill_circles(&circle, 0.25);
        assert_eq!(full.pixel(10, 10)[3], 204);
        assert_eq!(faded.pixel(10, 10)[3], 51);

        let mut none = Canvas::new(20, 20);
        none.fill_circles(&circle, 0.0);
        assert_eq!(none.coverage(), 0);
    }

    #[test]
    fn overlapping_circles_accumulate() {
        let mut canvas = Canvas::new(20, 20);
        let circle = CircleInstance::new(10.0, 10.0, 3.0, 0.5);
        canvas.fill_circles(&[circle, circle], 1.0);
        // 0.5 over 0.5 = 0.75, after the first layer rounds to 128
        assert_eq!(canvas.pixel(10, 10)[3], 192);
    }

    #[test]
    fn offscreen_circles_are_clipped() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_circles(
            &[
                CircleInstance::new(-50.0, 5.0, 3.0, 1.0),
                CircleInstance::new(5.0, 500.0, 3.0, 1.0),
                CircleInstance::new(-1.0, -1.0, 2.0, 1.0),
            ],
            1.0,
        );
        assert!(canvas.pixel(0, 0)[3] > 0);
        assert_eq!(canvas.pixel(9, 9)[3], 0);
    }

    #[test]
    fn clear_and_resize() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_circles(&[CircleInstance::new(5.0, 5.0, 3.0, 1.0)], 1.0);
        assert!(canvas.coverage() > 0);
        canvas.clear();
        assert_eq!(canvas.coverage(), 0);
        canvas.resize(30, 12);
        assert_eq!(canvas.size(), (30, 12));
    }

    #[test]
    fn flatten_over_background() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_circles(&[CircleInstance::new(5.0, 5.0, 3.0, 0.5)], 1.0);
        let flat = canvas.flatten([0, 0, 0]);
        assert_eq!(flat.get_pixel(5, 5).0, [128, 128, 128, 255]);
        assert_eq!(flat.get_pixel(0, 9).0, [0, 0, 0, 255]);
    }

    #[test]
    fn save_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut canvas = Canvas::new(16, 16).with_color([200, 220, 255]);
        canvas.fill_circles(&[CircleInstance::new(8.0, 8.0, 4.0, 1.0)], 1.0);
        canvas.save_png(&path, Some([2, 4, 10])).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (16, 16));
        assert_eq!(loaded.get_pixel(8, 8).0, [200, 220, 255, 255]);
        assert_eq!(loaded.get_pixel(0, 0).0, [2, 4, 10, 255]);
    }

    #[test]
    fn save_png_reports_bad_path() {
        let canvas = Canvas::new(4, 4);
        let result = canvas.save_png("/definitely/missing/dir/frame.png", None);
        assert!(matches!(result, Err(SnowError::ImageError(_))));
    }
}
