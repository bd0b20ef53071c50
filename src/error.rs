//! Error types for stolpekart.
//!
//! Geometry itself is total: scales, projections and layouts never fail.
//! Errors only come from parsing inputs (JSON configs, number-format
//! specifiers) and from the opt-in [`Dimensions::validate`] check.
//!
//! [`Dimensions::validate`]: crate::config::Dimensions::validate

use thiserror::Error;

/// Main error type for stolpekart operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A JSON configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A number-format specifier could not be parsed.
    #[error("Invalid format specifier '{spec}': {reason}")]
    InvalidFormat { spec: String, reason: String },

    /// The plot area left after subtracting margins is empty.
    #[error("Inner plot area must be positive, got {inner_width}x{inner_height}")]
    InvalidDimensions { inner_width: f64, inner_height: f64 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
