//! Error types shared by the calculation engine and the exporter

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by loan calculations and schedule export
#[derive(Debug, Error)]
pub enum LoanError {
    /// A precondition on caller-supplied input was violated
    #[error("Invalid input: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A schedule file could not be opened, written, or flushed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV encoder or decoder failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LoanError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        LoanError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for precondition failures; false for IO and CSV failures
    pub fn is_validation(&self) -> bool {
        matches!(self, LoanError::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = LoanError::validation("principal", "must be greater than zero");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid input: principal: must be greater than zero"
        );
    }

    #[test]
    fn test_io_is_not_validation() {
        let err = LoanError::Io {
            path: PathBuf::from("/nonexistent/out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(!err.is_validation());
        assert!(err.to_string().contains("/nonexistent/out.csv"));
    }
}
