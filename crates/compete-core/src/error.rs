//! Store error handling
//!
//! Typed errors for store operations. Patch operations on unknown ids report
//! a not-found variant instead of silently doing nothing, so callers can tell
//! a no-op apart from a successful update.

use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A component was reached through a context that never initialized it
    #[error("{0} must be used within an initialized AppContext")]
    MissingProvider(&'static str),

    /// No student with the given id
    #[error("Student not found: '{0}'")]
    StudentNotFound(String),

    /// No submission with the given id
    #[error("Submission not found: '{0}'")]
    SubmissionNotFound(String),

    /// A value could not be parsed into one of the domain enums
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

impl StoreError {
    /// Whether the caller can recover by retrying with different input
    ///
    /// A missing provider is a wiring bug and never recoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, StoreError::MissingProvider(_))
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StoreError::StudentNotFound(_) => {
                Some("List students with `compete students list` to find a valid id.")
            }
            StoreError::SubmissionNotFound(_) => {
                Some("List submissions with `compete submissions list` to find a valid id.")
            }
            _ => None,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_provider_is_fatal() {
        let err = StoreError::MissingProvider("Store");
        assert!(!err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Store must be used within an initialized AppContext"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = StoreError::StudentNotFound("ST-999".to_string());
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("ST-999"));
        assert!(err.recovery_suggestion().is_some());
    }

    #[test]
    fn test_invalid_value_display() {
        let err = StoreError::InvalidValue {
            field: "status",
            value: "maybe".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("status"));
        assert!(msg.contains("maybe"));
        assert!(err.recovery_suggestion().is_none());
    }
}
