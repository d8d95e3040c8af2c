//! Text rasterization with system fonts via cosmic-text

use crate::layout::TextLayout;
use crate::raster::{AlphaMask, GlyphRaster};
use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use snowfall_core::{Result, SnowError};

/// Line height relative to font size used when shaping a single line
const LINE_HEIGHT: f32 = 1.2;

/// Shapes and rasterizes each line with the host's installed fonts
pub struct CosmicRaster {
    /// Font system - manages font database
    font_system: FontSystem,
    /// Swash cache for glyph rasterization
    swash_cache: SwashCache,
    /// Preferred family; falls back to the default sans-serif face
    family: Option<String>,
}

impl CosmicRaster {
    /// Create a rasterizer backed by the system font database
    pub fn new(family: Option<String>) -> Self {
        Self::with_font_system(FontSystem::new(), family)
    }

    pub fn with_font_system(font_system: FontSystem, family: Option<String>) -> Self {
        Self {
            font_system,
            swash_cache: SwashCache::new(),
            family,
        }
    }

    pub fn has_fonts(&self) -> bool {
        self.font_system.db().faces().next().is_some()
    }
}

impl GlyphRaster for CosmicRaster {
    fn rasterize(&mut self, layout: &TextLayout, width: u32, height: u32) -> Result<AlphaMask> {
        if !self.has_fonts() {
            return Err(SnowError::RasterError(
                "no fonts available for text rasterization".to_string(),
            ));
        }

        let mut mask = AlphaMask::new(width, height);
        let metrics = Metrics::new(layout.font_size, layout.font_size * LINE_HEIGHT);
        for line in &layout.lines {
            let family = match self.family.as_deref() {
                Some(name) => Family::Name(name),
                None => Family::SansSerif,
            };
            let attrs = Attrs::new().family(family).weight(Weight(layout.font_weight));

            let mut buffer = Buffer::new(&mut self.font_system, metrics);
            buffer.set_size(&mut self.font_system, None, None);
            buffer.set_text(&mut self.font_system, &line.text, attrs, Shaping::Advanced);
            buffer.shape_until_scroll(&mut self.font_system, false);

            let line_width = buffer
                .layout_runs()
                .map(|run| run.line_w)
                .fold(0.0f32, f32::max);
            // Centre horizontally and on the middle of the line box vertically
            let origin_x = (line.center.x - line_width / 2.0).round() as i32;
            let origin_y = (line.center.y - metrics.line_height / 2.0).round() as i32;

            buffer.draw(
                &mut self.font_system,
                &mut self.swash_cache,
                Color::rgb(0xFF, 0xFF, 0xFF),
                |x, y, w, h, color| {
                    mask.cover_rect(origin_x + x, origin_y + y, w, h, color.a());
                },
            );
        }

        log::trace!(
            "[glyph] rasterized {} line(s) at {:.1}px",
            layout.lines.len(),
            layout.font_size
        );
        Ok(mask)
    }
}
