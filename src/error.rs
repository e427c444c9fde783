//! Error types for projection inputs, scenario files and analysis payloads

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ProjectionError>;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for precondition failures on projection inputs
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ProjectionError::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let error = ProjectionError::invalid("contractYears", "must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid input for contractYears: must be at least 1"
        );
        assert!(error.is_invalid_input());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let error: ProjectionError = io.into();
        assert!(matches!(error, ProjectionError::Io(_)));
        assert!(!error.is_invalid_input());
    }
}
