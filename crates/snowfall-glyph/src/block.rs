//! Font-free rasterizer drawing every visible character as a solid block

use crate::layout::TextLayout;
use crate::raster::{AlphaMask, GlyphRaster};
use snowfall_core::Result;

/// Horizontal advance per character, relative to font size
const ADVANCE: f32 = 0.6;
/// Block width and height, relative to font size
const BLOCK_WIDTH: f32 = 0.5;
const BLOCK_HEIGHT: f32 = 0.7;

/// Deterministic stand-in for a real font. Useful where no system fonts are
/// installed and wherever exact, repeatable coverage matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockRaster;

impl GlyphRaster for BlockRaster {
    fn rasterize(&mut self, layout: &TextLayout, width: u32, height: u32) -> Result<AlphaMask> {
        let mut mask = AlphaMask::new(width, height);
        let advance = layout.font_size * ADVANCE;
        let block_w = (layout.font_size * BLOCK_WIDTH).round().max(1.0) as u32;
        let block_h = (layout.font_size * BLOCK_HEIGHT).round().max(1.0) as u32;

        for line in &layout.lines {
            let chars = line.text.chars().count() as f32;
            let start_x = line.center.x - chars * advance / 2.0;
            let top = (line.center.y - block_h as f32 / 2.0).round() as i32;
            for (i, c) in line.text.chars().enumerate() {
                if c.is_whitespace() {
                    continue;
                }
                let left = (start_x + i as f32 * advance).round() as i32;
                mask.cover_rect(left, top, block_w, block_h, 255);
            }
        }
        Ok(mask)
    }
}
