//! Error types for snowfall

use thiserror::Error;

/// The main error type for snowfall operations
#[derive(Debug, Error)]
pub enum SnowError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Invalid config: {0}")]
    ConfigError(String),

    #[error("Raster error: {0}")]
    RasterError(String),

    #[error("Image error: {0}")]
    ImageError(String),
}

/// Result type alias for snowfall operations
pub type Result<T> = std::result::Result<T, SnowError>;

impl From<toml::de::Error> for SnowError {
    fn from(err: toml::de::Error) -> Self {
        SnowError::TomlParseError(err.to_string())
    }
}
