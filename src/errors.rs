//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum PlateFieldError {
    /// Raised when the plotting backend fails to draw the figure.
    #[error("render error: {0}")]
    Render(String),
    /// Raised when a configuration name does not match any preset.
    #[error("unknown configuration `{0}` (expected one, two or three)")]
    UnknownConfiguration(String),
    /// Raised when a figure or page cannot be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlateFieldError {
    /// Wraps any displayable backend failure as a [`PlateFieldError::Render`].
    pub(crate) fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, PlateFieldError>;
