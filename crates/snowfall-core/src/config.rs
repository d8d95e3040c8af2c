//! Effect configuration (parsed from TOML)
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock greeting-card look. Sections mirror the subsystems that read them.

use crate::error::{Result, SnowError};
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration for one effect instance
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    pub snow: SnowConfig,
    pub morph: MorphConfig,
    pub fade: FadeConfig,
    pub clock: ClockConfig,
    pub glyph: GlyphConfig,
    /// Morph text derived from a greeting name; `{name}` is substituted
    pub greeting_template: String,
}

/// Ambient snow population and drift
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SnowConfig {
    pub particle_count: usize,
    pub speed_min: f32,
    pub speed_max: f32,
    pub size_min: f32,
    pub size_range: f32,
    /// Full width of the horizontal velocity range, centred on zero
    pub drift_x: f32,
    pub speed_divisor: f32,
    pub freq_min: f32,
    pub freq_range: f32,
    /// How far above the viewport a fresh activation may start a flake
    pub top_spawn_depth: f32,
    pub opacity: f32,
    /// Sway amplitude is `width / sway_divisor` device pixels
    pub sway_divisor: f32,
}

/// Target-seeking behaviour while text is shown
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    pub speed: f32,
    pub text_opacity: f32,
    pub size_min: f32,
    pub size_range: f32,
}

/// Global opacity envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    pub speed: f32,
    pub idle_threshold: f32,
}

/// Elapsed-time normalization
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub baseline_frame_ms: f64,
    pub max_frame_ms: f64,
}

/// Text layout and rasterized-pixel sampling
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub x_offset: f32,
    pub y_offset: f32,
    pub scale: f32,
    pub width_divisor: f32,
    pub max_font_px: f32,
    pub line_spacing: f32,
    pub alpha_threshold: u8,
    pub stride_factor: f32,
    pub jitter: f32,
    /// Text containing this marker is laid out on two lines
    pub separator: String,
    /// Fixed first line of a split greeting. When unset or empty the text
    /// before the separator is used instead.
    pub first_line: Option<String>,
    pub second_line_prefix: String,
    pub font_weight: u16,
    pub font_family: Option<String>,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            snow: SnowConfig::default(),
            morph: MorphConfig::default(),
            fade: FadeConfig::default(),
            clock: ClockConfig::default(),
            glyph: GlyphConfig::default(),
            greeting_template: "Merry Christmas to {name}".to_string(),
        }
    }
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            particle_count: 1800,
            speed_min: 0.4,
            speed_max: 1.6,
            size_min: 0.4,
            size_range: 1.6,
            drift_x: 0.1,
            speed_divisor: 3.0,
            freq_min: 0.1,
            freq_range: 1.0,
            top_spawn_depth: 0.8,
            opacity: 0.3,
            sway_divisor: 150.0,
        }
    }
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            speed: 0.01,
            text_opacity: 0.95,
            size_min: 1.0,
            size_range: 0.8,
        }
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            speed: 0.04,
            idle_threshold: 0.001,
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            baseline_frame_ms: 16.0,
            max_frame_ms: 250.0,
        }
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            x_offset: 0.18,
            y_offset: -0.22,
            scale: 1.72,
            width_divisor: 8.0,
            max_font_px: 60.0,
            line_spacing: 1.4,
            alpha_threshold: 120,
            stride_factor: 1.8,
            jitter: 0.0015,
            separator: " to ".to_string(),
            first_line: Some("Merry Christmas".to_string()),
            second_line_prefix: "to ".to_string(),
            font_weight: 900,
            font_family: None,
        }
    }
}

impl EffectConfig {
    /// Parse and validate a config from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Morph text for a greeting name, or `None` when the name is blank
    pub fn greeting_for(&self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(self.greeting_template.replace("{name}", name))
    }

    /// Reject values that would stall or destabilize the simulation
    pub fn validate(&self) -> Result<()> {
        let snow = &self.snow;
        if snow.speed_max < snow.speed_min {
            return Err(invalid("snow.speed_max must be >= snow.speed_min"));
        }
        if snow.size_min <= 0.0 || snow.size_range < 0.0 {
            return Err(invalid("snow.size_min must be > 0 and snow.size_range >= 0"));
        }
        if snow.speed_divisor <= 0.0 || snow.sway_divisor <= 0.0 {
            return Err(invalid("snow divisors must be positive"));
        }
        check_unit("snow.opacity", snow.opacity)?;
        check_unit("morph.text_opacity", self.morph.text_opacity)?;
        check_rate("morph.speed", self.morph.speed)?;
        check_rate("fade.speed", self.fade.speed)?;
        if self.morph.size_min <= 0.0 || self.morph.size_range < 0.0 {
            return Err(invalid("morph.size_min must be > 0 and morph.size_range >= 0"));
        }
        if !(0.0..1.0).contains(&self.fade.idle_threshold) {
            return Err(invalid("fade.idle_threshold must be in [0, 1)"));
        }
        if self.clock.baseline_frame_ms <= 0.0 || self.clock.max_frame_ms <= 0.0 {
            return Err(invalid("clock intervals must be positive"));
        }

        let glyph = &self.glyph;
        if glyph.scale <= 0.0
            || glyph.width_divisor <= 0.0
            || glyph.max_font_px <= 0.0
            || glyph.stride_factor <= 0.0
        {
            return Err(invalid("glyph sizing factors must be positive"));
        }
        if glyph.line_spacing < 0.0 || glyph.jitter < 0.0 {
            return Err(invalid("glyph.line_spacing and glyph.jitter must be >= 0"));
        }
        if glyph.separator.is_empty() {
            return Err(invalid("glyph.separator must not be empty"));
        }
        if !self.greeting_template.contains("{name}") {
            return Err(invalid("greeting_template must contain {name}"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> SnowError {
    SnowError::ConfigError(message.to_string())
}

fn check_unit(field: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SnowError::ConfigError(format!(
            "{field} must be between 0 and 1, got {value}"
        )))
    }
}

fn check_rate(field: &str, value: f32) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(SnowError::ConfigError(format!(
            "{field} must be in (0, 1], got {value}"
        )))
    }
}
