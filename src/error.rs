//! Custom error types for manat-format
//!
//! Formatting itself never fails (malformed input degrades to a fallback
//! string). Errors only come from strict parsing of month identifiers and
//! locale tags, and from the settings and CSV I/O used by the binary.

use thiserror::Error;

/// The main error type for manat-format operations
#[derive(Error, Debug)]
pub enum FormatError {
    /// A month identifier that is not canonical `YYYY-MM`
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// A locale tag outside the supported languages
    #[error("Unsupported locale: {0}")]
    InvalidLocale(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading errors
    #[error("CSV error: {0}")]
    Csv(String),
}

impl FormatError {
    /// Create an invalid-month error from the offending input
    pub fn invalid_month(input: impl Into<String>) -> Self {
        Self::InvalidMonth(input.into())
    }
}

impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for FormatError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for manat-format operations
pub type FormatResult<T> = Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormatError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_month_error() {
        let err = FormatError::invalid_month("2024-13");
        assert_eq!(err.to_string(), "Invalid month: 2024-13");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FormatError = io_err.into();
        assert!(matches!(err, FormatError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FormatError = json_err.into();
        assert!(matches!(err, FormatError::Json(_)));
    }
}
