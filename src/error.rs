//! # Error Types
//!
//! This module defines error types used throughout the gaiji library.

use thiserror::Error;

/// Main error type for gaiji operations
#[derive(Debug, Error)]
pub enum GaijiError {
    /// Missing or invalid font/table data, or an impossible device setup.
    /// Raised at session start and never recovered.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The font engine could not render a glyph
    #[error("Font render error: {0}")]
    FontRender(String),

    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Image encoding error (PNG previews)
    #[error("Image error: {0}")]
    Image(String),

    /// Configuration file parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
