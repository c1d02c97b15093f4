//! Error types for misuse of the widget API and configuration loading.

use thiserror::Error;

/// Errors surfaced by the floating action button.
#[derive(Debug, Error)]
pub enum LiquidError {
    #[error("cell index {index} is out of range (cells: {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("button is closed")]
    NotOpen,
    #[error("cell {0} is not interactive while animating")]
    CellNotInteractive(usize),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for widget operations.
pub type Result<T> = std::result::Result<T, LiquidError>;
