//! Error types for cell and pack parameter validation.

use thiserror::Error;

/// Errors raised while validating layout parameters.
///
/// Validation happens before any placement is computed, so a failed call
/// never yields a partial layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A parameter violated its constraint (non-positive size, count below one, ...).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human readable description of the violated constraint.
        reason: String,
    },
}

impl LayoutError {
    /// Create a new [`LayoutError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the name of the parameter that caused this error.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = LayoutError::invalid_parameter("spacing", "must be greater than zero, got 0");
        assert_eq!(
            err.to_string(),
            "invalid parameter `spacing`: must be greater than zero, got 0"
        );
        assert_eq!(err.parameter(), "spacing");
    }
}
