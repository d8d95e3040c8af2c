//! Snowfall Glyph - Turns greeting text into particle target points
//!
//! - `TextLayout`: line splitting, responsive font size and line placement
//! - `GlyphRaster`: off-screen text rasterization into an `AlphaMask`
//!   (`CosmicRaster` for real fonts, `BlockRaster` as a font-free fallback)
//! - `GlyphSampler`: strided alpha scan, jitter and shuffle into normalized points

pub mod block;
pub mod cosmic;
pub mod layout;
pub mod raster;
pub mod sampler;

pub use block::BlockRaster;
pub use cosmic::CosmicRaster;
pub use layout::{split_lines, LineLayout, TextLayout};
pub use raster::{AlphaMask, GlyphRaster};
pub use sampler::{scan_mask, stride_for, GlyphSampler};
