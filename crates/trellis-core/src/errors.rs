//! Error types for the Trellis engine.

use thiserror::Error;

/// Errors raised while configuring or arranging a layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid track sizing '{value}': {reason}")]
    InvalidTrackSizing { value: String, reason: String },

    #[error("Size must be a finite, non-negative number, got {value}")]
    NegativeSize { value: f64 },

    #[error("Flex factor must be a finite, positive number, got {factor}")]
    InvalidFlexFactor { factor: f64 },

    #[error("Spacing must be a finite, non-negative number, got {value}")]
    InvalidSpacing { value: f64 },

    #[error("Measurement is stale: {reason}")]
    StaleMeasurement { reason: String },

    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("Invalid layout configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl LayoutError {
    /// Check a declared size, returning it unchanged when valid.
    pub fn check_size(value: f64) -> Result<f64, LayoutError> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(LayoutError::NegativeSize { value })
        }
    }

    /// Check a flex factor, returning it unchanged when valid.
    pub fn check_factor(factor: f64) -> Result<f64, LayoutError> {
        if factor.is_finite() && factor > 0.0 {
            Ok(factor)
        } else {
            Err(LayoutError::InvalidFlexFactor { factor })
        }
    }
}
