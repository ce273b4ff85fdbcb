//! Core error types for dayplan domain logic
//!
//! These errors represent domain-level failures, not I/O or terminal errors.
//! Store operations are total and never produce one of these.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },
}

impl CoreError {
    /// Create a parse error with a message
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = CoreError::validation("category", "Invalid category");
        assert_eq!(err.to_string(), "Validation error: category - Invalid category");
    }

    #[test]
    fn test_parse_display() {
        let err = CoreError::parse("Unrecognized date: 'someday'");
        assert_eq!(err.to_string(), "Parse error: Unrecognized date: 'someday'");
    }
}
