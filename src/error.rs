//! Centralized error handling for collostruct.
//!
//! Recoverable query failures (`UnknownForm`, `InvalidColumn`) reach the UI
//! layer as values so it can render an empty result plus a message instead of
//! crashing. `DataLoad` is fatal and aborts startup.

use std::fmt;

/// Main error type for collostruct operations.
#[derive(Debug)]
pub enum CollostructError {
    /// I/O errors (file operations, config paths, etc.)
    Io(std::io::Error),

    /// The input dataset is missing, malformed, or lacks required columns.
    DataLoad(String),

    /// Internal dataframe failures (Polars).
    DataProcessing(String),

    /// The requested construction form is not in the form index.
    UnknownForm(String),

    /// A requested table column is not a recognized mapped field.
    InvalidColumn(String),

    /// Configuration errors
    Config(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for CollostructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataLoad(msg) => write!(f, "Dataset load error: {msg}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::UnknownForm(form) => write!(f, "Unknown construction form: {form}"),
            Self::InvalidColumn(name) => write!(f, "Unrecognized table column: {name}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CollostructError {}

impl From<std::io::Error> for CollostructError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for CollostructError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<serde_json::Error> for CollostructError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<anyhow::Error> for CollostructError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

/// Result type alias for collostruct operations.
pub type Result<T> = std::result::Result<T, CollostructError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CollostructError::UnknownForm("什麼都".to_owned());
        assert_eq!(err.to_string(), "Unknown construction form: 什麼都");

        let err = CollostructError::InvalidColumn("Frequency".to_owned());
        assert_eq!(err.to_string(), "Unrecognized table column: Frequency");

        let err = CollostructError::DataLoad("missing column Form".to_owned());
        assert_eq!(err.to_string(), "Dataset load error: missing column Form");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "data.csv");
        let err: CollostructError = io.into();
        assert!(matches!(err, CollostructError::Io(_)));
    }
}
