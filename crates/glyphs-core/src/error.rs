//! Error types for Glyphs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlyphsError {
    /// Settings could not be extracted from the configured sources
    #[error("invalid settings: {0}")]
    Config(#[from] figment::Error),
    /// Reading input from or drawing to the terminal failed
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GlyphsError>;
