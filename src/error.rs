//! Error types for predecir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for predecir operations.
///
/// Covers the two failure families the demo actually has: artifact load
/// problems (missing, corrupt, wrong version) and input problems (shape or
/// schema disagreement between the form and the artifact).
///
/// # Examples
///
/// ```
/// use predecir::error::PredecirError;
///
/// let err = PredecirError::DimensionMismatch {
///     expected: "4".to_string(),
///     actual: "3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum PredecirError {
    /// Feature vector length doesn't match what the model was trained on.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Feature names or ordering disagree between form and artifact.
    SchemaMismatch {
        /// Feature names the artifact was trained with
        expected: String,
        /// Feature names the caller supplied
        actual: String,
    },

    /// No slider with the given name exists on the form.
    UnknownSlider {
        /// Name the caller asked for
        name: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Invalid or corrupt model artifact.
    FormatError {
        /// Error description
        message: String,
    },

    /// Unsupported artifact format version.
    UnsupportedVersion {
        /// Version found
        found: (u8, u8),
        /// Maximum supported version
        supported: (u8, u8),
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PredecirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredecirError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Feature dimension mismatch: expected {expected}, got {actual}"
                )
            }
            PredecirError::SchemaMismatch { expected, actual } => {
                write!(
                    f,
                    "Feature schema mismatch: artifact expects [{expected}], form supplies [{actual}]"
                )
            }
            PredecirError::UnknownSlider { name } => {
                write!(f, "Unknown slider: {name}")
            }
            PredecirError::Io(e) => write!(f, "I/O error: {e}"),
            PredecirError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            PredecirError::FormatError { message } => {
                write!(f, "Invalid model format: {message}")
            }
            PredecirError::UnsupportedVersion { found, supported } => {
                write!(
                    f,
                    "Unsupported format version: found {}.{}, max supported {}.{}",
                    found.0, found.1, supported.0, supported.1
                )
            }
            PredecirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PredecirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredecirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PredecirError {
    fn from(err: std::io::Error) -> Self {
        PredecirError::Io(err)
    }
}

impl From<serde_json::Error> for PredecirError {
    fn from(err: serde_json::Error) -> Self {
        PredecirError::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for PredecirError {
    fn from(err: bincode::Error) -> Self {
        PredecirError::Serialization(err.to_string())
    }
}

impl From<&str> for PredecirError {
    fn from(msg: &str) -> Self {
        PredecirError::Other(msg.to_string())
    }
}

impl From<String> for PredecirError {
    fn from(msg: String) -> Self {
        PredecirError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PredecirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = PredecirError::DimensionMismatch {
            expected: "4".to_string(),
            actual: "3".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_schema_mismatch_display() {
        let err = PredecirError::SchemaMismatch {
            expected: "petal length (cm)".to_string(),
            actual: "petal len".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("schema mismatch"));
        assert!(msg.contains("petal length (cm)"));
    }

    #[test]
    fn test_unknown_slider_display() {
        let err = PredecirError::UnknownSlider {
            name: "stem-girth".to_string(),
        };
        assert!(err.to_string().contains("stem-girth"));
    }

    #[test]
    fn test_unsupported_version_display() {
        let err = PredecirError::UnsupportedVersion {
            found: (2, 0),
            supported: (1, 0),
        };
        assert!(err.to_string().contains("found 2.0"));
        assert!(err.to_string().contains("max supported 1.0"));
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;
        let err = PredecirError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let bad: std::result::Result<u32, serde_json::Error> = serde_json::from_str("not json");
        let err: PredecirError = bad.unwrap_err().into();
        assert!(matches!(err, PredecirError::Serialization(_)));
    }

    #[test]
    fn test_bincode_error_converts_to_serialization() {
        let bad: std::result::Result<String, bincode::Error> = bincode::deserialize(&[0xff]);
        let err: PredecirError = bad.unwrap_err().into();
        assert!(matches!(err, PredecirError::Serialization(_)));
    }

    #[test]
    fn test_from_str_and_string() {
        let err: PredecirError = "boom".into();
        assert_eq!(err.to_string(), "boom");
        let err: PredecirError = String::from("wider boom").into();
        assert_eq!(err.to_string(), "wider boom");
    }
}
