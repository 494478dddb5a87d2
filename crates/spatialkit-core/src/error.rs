//! Error types for recoverable failures.

use thiserror::Error;

/// Errors raised while parsing or validating configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpatialError {
    #[error("Unknown placement: {0}")]
    UnknownPlacement(String),
    #[error("Unknown adaptation: {0}")]
    UnknownAdaptation(String),
    #[error("Invalid size: {0}")]
    InvalidSize(String),
    #[error("Zoom must be a finite, positive number (got {0})")]
    InvalidZoom(f64),
    #[error("Palette must contain at least one color")]
    EmptyPalette,
}

/// Result type for fallible SpatialKit operations.
pub type SpatialResult<T> = Result<T, SpatialError>;
