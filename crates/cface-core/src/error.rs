//! Error types for cface-core
//!
//! Descriptor construction fails with `OutOfRange`; row-based rendering
//! fails with `MissingRow` when the requested record does not exist.
//! Neither is retried or recovered inside the crate.

use thiserror::Error;

/// Main error type for face construction and rendering
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum FaceError {
    /// A unit feature value outside [0, 1]
    #[error("Feature '{feature}' must be within [0, 1], got {value}")]
    OutOfRange { feature: String, value: f64 },

    /// A feature name that is not one of the fifteen
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// Row-based rendering without a row to extract from
    #[error("No row {index} to render (table has {rows} rows)")]
    MissingRow { index: usize, rows: usize },
}

/// Errors in rendering style configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Color string that is not `#RRGGBB`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Value outside its allowed range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Unparseable configuration document
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Result type alias for face operations
pub type FaceResult<T> = Result<T, FaceError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_names_feature_and_value() {
        let err = FaceError::OutOfRange {
            feature: "eye_angle".to_string(),
            value: 1.5,
        };
        let message = err.to_string();
        assert!(message.contains("eye_angle"));
        assert!(message.contains("1.5"));
    }

    #[test]
    fn test_missing_row_display() {
        let err = FaceError::MissingRow { index: 4, rows: 2 };
        assert_eq!(err.to_string(), "No row 4 to render (table has 2 rows)");
    }
}
