//! CLI command implementations

pub mod render;
pub mod sample;

use anyhow::{Context, Result};
use clap::ValueEnum;
use snowfall_core::EffectConfig;
use snowfall_glyph::{BlockRaster, CosmicRaster, GlyphRaster};

/// Which text rasterizer to sample greetings with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RasterKind {
    /// System fonts via cosmic-text
    Cosmic,
    /// Solid blocks per character, no fonts required
    Block,
}

/// Load the config file when given, otherwise the built-in defaults
pub fn load_config(path: Option<&str>) -> Result<EffectConfig> {
    match path {
        Some(path) => {
            EffectConfig::load(path).with_context(|| format!("Failed to load config '{}'", path))
        }
        None => Ok(EffectConfig::default()),
    }
}

/// Build the requested rasterizer, falling back to blocks without fonts
pub fn make_raster(kind: RasterKind, config: &EffectConfig) -> Box<dyn GlyphRaster> {
    match kind {
        RasterKind::Cosmic => {
            let raster = CosmicRaster::new(config.glyph.font_family.clone());
            if raster.has_fonts() {
                Box::new(raster)
            } else {
                log::warn!("No system fonts found, using block glyphs");
                Box::new(BlockRaster)
            }
        }
        RasterKind::Block => Box::new(BlockRaster),
    }
}
