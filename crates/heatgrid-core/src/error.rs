//! Error types for property validation.

use thiserror::Error;

/// A physical property or boundary value failed validation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PropertyError {
    /// The value is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending property.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The value must be strictly positive.
    #[error("{name} must be positive, got {value}")]
    NotPositive {
        /// Name of the offending property.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Reject NaN and infinities.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, PropertyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PropertyError::NonFinite { name, value })
    }
}

/// Reject non-finite, zero and negative values.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, PropertyError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PropertyError::NotPositive { name, value })
    }
}
