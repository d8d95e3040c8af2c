//! Snowfall Core - Foundational types for the snowfall effect
//!
//! This crate provides the types that all other snowfall crates depend on:
//! - `Point2` - Normalized 2D coordinates
//! - `Dimensions`, `Viewport` - Output surface sizing
//! - `EffectConfig` - Tunables for snow, morphing, fading and glyph sampling
//! - Error types and Result alias

mod config;
mod error;
mod types;

pub use config::{ClockConfig, EffectConfig, FadeConfig, GlyphConfig, MorphConfig, SnowConfig};
pub use error::{Result, SnowError};
pub use types::{Dimensions, Point2, Viewport};
