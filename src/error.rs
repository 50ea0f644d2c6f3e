//! Error types for Medir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Medir operations.
///
/// Provides detailed context about failures including shape mismatches,
/// unsupported unit scales, and invalid statistical parameters.
///
/// # Examples
///
/// ```
/// use medir::error::MedirError;
///
/// let err = MedirError::DimensionMismatch {
///     expected: "7x8".to_string(),
///     actual: "7x9".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MedirError {
    /// Array shapes don't match for the operation.
    DimensionMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// Unrecognized temperature scale identifier.
    ///
    /// `param` names the offending argument (`old_scale` or `new_scale`)
    /// so callers can tell which side of the conversion was wrong.
    UnsupportedScale {
        /// Parameter name (`old_scale` or `new_scale`)
        param: &'static str,
        /// The rejected scale string
        value: String,
    },

    /// Invalid statistical parameter value provided.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MedirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedirError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Array dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MedirError::UnsupportedScale { param, value } => {
                write!(
                    f,
                    "Unsupported temperature scale: {param}={value:?} \
                     (recognized: Celsius/C, Kelvin/K, Fahrenheit/F, Rankine/R)"
                )
            }
            MedirError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
            MedirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MedirError {}

impl From<&str> for MedirError {
    fn from(msg: &str) -> Self {
        MedirError::Other(msg.to_string())
    }
}

impl From<String> for MedirError {
    fn from(msg: String) -> Self {
        MedirError::Other(msg)
    }
}

impl MedirError {
    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MedirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MedirError::shape_mismatch((7, 8), (7, 9));
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("7x8"));
        assert!(err.to_string().contains("7x9"));
    }

    #[test]
    fn test_unsupported_scale_names_parameter() {
        let err = MedirError::UnsupportedScale {
            param: "old_scale",
            value: "cheddar".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("old_scale="));
        assert!(msg.contains("cheddar"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = MedirError::InvalidParameter {
            param: "ddof".to_string(),
            value: "9".to_string(),
            constraint: "< number of observations".to_string(),
        };
        assert!(err.to_string().contains("ddof"));
        assert!(err.to_string().contains("9"));
    }

    #[test]
    fn test_from_str() {
        let err: MedirError = "test error".into();
        assert!(matches!(err, MedirError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: MedirError = "test error".to_string().into();
        assert!(matches!(err, MedirError::Other(_)));
    }
}
