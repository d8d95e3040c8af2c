//! Glyph sampler: rendered text to shuffled, jittered normalized points

use crate::layout::TextLayout;
use crate::raster::{AlphaMask, GlyphRaster};
use snowfall_core::{Dimensions, GlyphConfig, Point2, Result};
use snowfall_particles::ParticleRng;

/// Pixel stride for the alpha scan at a given device pixel ratio
pub fn stride_for(device_pixel_ratio: f32, stride_factor: f32) -> u32 {
    ((device_pixel_ratio * stride_factor).floor() as u32).max(1)
}

/// Grid cells, in raster order, whose coverage exceeds `threshold`
pub fn scan_mask(mask: &AlphaMask, stride: u32, threshold: u8) -> Vec<(u32, u32)> {
    let stride = stride.max(1) as usize;
    let mut cells = Vec::new();
    for y in (0..mask.height()).step_by(stride) {
        for x in (0..mask.width()).step_by(stride) {
            if mask.get(x, y) > threshold {
                cells.push((x, y));
            }
        }
    }
    cells
}

/// Converts text into target points for the particle store
pub struct GlyphSampler<R> {
    raster: R,
    config: GlyphConfig,
}

impl<R: GlyphRaster> GlyphSampler<R> {
    pub fn new(raster: R, config: GlyphConfig) -> Self {
        Self { raster, config }
    }

    pub fn config(&self) -> &GlyphConfig {
        &self.config
    }

    pub fn raster(&self) -> &R {
        &self.raster
    }

    /// Opaque grid cells for `text` at `dims`, before jitter and shuffle.
    /// Deterministic for a given text, size and pixel ratio.
    pub fn sample_cells(&mut self, text: &str, dims: Dimensions) -> Result<Vec<(u32, u32)>> {
        if dims.is_empty() || text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let layout = TextLayout::compute(text, dims, &self.config);
        let mask = self.raster.rasterize(&layout, dims.width, dims.height)?;
        let stride = stride_for(dims.device_pixel_ratio, self.config.stride_factor);
        Ok(scan_mask(&mask, stride, self.config.alpha_threshold))
    }

    /// Normalized target points for `text`, jittered and uniformly shuffled.
    ///
    /// The number of points depends only on the rendered coverage; callers
    /// use as many as they have particles for.
    pub fn sample(
        &mut self,
        text: &str,
        dims: Dimensions,
        rng: &mut ParticleRng,
    ) -> Result<Vec<Point2>> {
        let cells = self.sample_cells(text, dims)?;
        let width = dims.width as f32;
        let height = dims.height as f32;
        let jitter = self.config.jitter;

        let mut points: Vec<Point2> = cells
            .into_iter()
            .map(|(x, y)| {
                Point2::new(
                    (x as f32 / width + rng.jitter(jitter)).clamp(0.0, 1.0),
                    (y as f32 / height + rng.jitter(jitter)).clamp(0.0, 1.0),
                )
            })
            .collect();
        rng.shuffle(&mut points);

        log::debug!(
            "[glyph] sampled {} point(s) for {:?} at {}x{}",
            points.len(),
            text,
            dims.width,
            dims.height
        );
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockRaster;
    use snowfall_core::SnowError;
    use std::collections::HashSet;

    struct NoFonts;

    impl GlyphRaster for NoFonts {
        fn rasterize(&mut self, _: &TextLayout, _: u32, _: u32) -> Result<AlphaMask> {
            Err(SnowError::RasterError("unavailable".to_string()))
        }
    }

    fn sampler() -> GlyphSampler<BlockRaster> {
        GlyphSampler::new(BlockRaster, GlyphConfig::default())
    }

    #[test]
    fn stride_follows_pixel_ratio() {
        assert_eq!(stride_for(1.0, 1.8), 1);
        assert_eq!(stride_for(2.0, 1.8), 3);
        assert_eq!(stride_for(3.0, 1.8), 5);
        assert_eq!(stride_for(0.25, 1.8), 1);
    }

    #[test]
    fn scan_respects_stride_and_threshold() {
        let mut mask = AlphaMask::new(10, 10);
        mask.cover_rect(0, 1, 10, 9, 121);
        mask.cover_rect(0, 0, 10, 1, 120);
        let cells = scan_mask(&mask, 3, 120);
        // Rows 3, 6, 9 and columns 0, 3, 6, 9; row 0 sits at the threshold
        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(|&(x, y)| x % 3 == 0 && y % 3 == 0 && y > 0));
    }

    #[test]
    fn cells_are_deterministic() {
        let mut sampler = sampler();
        let dims = Dimensions::new(800, 600, 2.0);
        let a: HashSet<_> = sampler
            .sample_cells("Merry Christmas to Alex", dims)
            .unwrap()
            .into_iter()
            .collect();
        let b: HashSet<_> = sampler
            .sample_cells("Merry Christmas to Alex", dims)
            .unwrap()
            .into_iter()
            .collect();
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn points_are_normalized_and_near_their_cells() {
        let mut sampler = sampler();
        let mut rng = ParticleRng::new(11);
        let dims = Dimensions::new(800, 600, 1.0);
        let cells = sampler.sample_cells("Merry Christmas to Alex", dims).unwrap();
        let points = sampler
            .sample("Merry Christmas to Alex", dims, &mut rng)
            .unwrap();

        assert_eq!(points.len(), cells.len());
        assert!(points.iter().all(|p| p.is_normalized()));
        // Every point lies within jitter distance of some opaque cell
        let cell_set: HashSet<_> = cells.into_iter().collect();
        for p in points.iter().take(50) {
            let cx = (p.x * 800.0).round() as u32;
            let cy = (p.y * 600.0).round() as u32;
            let near = cell_set
                .iter()
                .any(|&(x, y)| x.abs_diff(cx) <= 1 && y.abs_diff(cy) <= 1);
            assert!(near, "point {p:?} far from any cell");
        }
    }

    #[test]
    fn points_are_shuffled() {
        let mut sampler = sampler();
        let mut rng = ParticleRng::new(12);
        let dims = Dimensions::new(800, 600, 1.0);
        let points = sampler.sample("Hello", dims, &mut rng).unwrap();
        // Raster order would have non-decreasing y
        let ordered = points.windows(2).all(|w| w[0].y <= w[1].y + 0.01);
        assert!(!ordered);
    }

    #[test]
    fn small_text_yields_fewer_points_than_particles() {
        let mut sampler = sampler();
        let mut rng = ParticleRng::new(13);
        let points = sampler
            .sample("i", Dimensions::new(320, 240, 3.0), &mut rng)
            .unwrap();
        assert!(!points.is_empty());
        assert!(points.len() < 1800);
    }

    #[test]
    fn blank_text_or_empty_surface_yields_nothing() {
        let mut sampler = sampler();
        let mut rng = ParticleRng::new(14);
        assert!(sampler
            .sample("   ", Dimensions::new(800, 600, 1.0), &mut rng)
            .unwrap()
            .is_empty());
        assert!(sampler
            .sample("Hello", Dimensions::new(0, 600, 1.0), &mut rng)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn raster_failure_propagates() {
        let mut sampler = GlyphSampler::new(NoFonts, GlyphConfig::default());
        let mut rng = ParticleRng::new(15);
        let result = sampler.sample("Hello", Dimensions::new(800, 600, 1.0), &mut rng);
        assert!(matches!(result, Err(SnowError::RasterError(_))));
    }
}
