//! Application error types for dayplan
//!
//! These wrap core errors and add terminal and configuration failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error: {context}")]
    Terminal {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },
}

impl AppError {
    /// Create a config error with a message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a terminal error with context
    pub fn terminal(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            context: "IO operation failed".to_string(),
            source: err,
        }
    }
}

impl From<confy::ConfyError> for AppError {
    fn from(err: confy::ConfyError) -> Self {
        Self::config_with_source("Failed to load configuration", err)
    }
}

impl From<dayplan_core::CoreError> for AppError {
    fn from(err: dayplan_core::CoreError) -> Self {
        match err {
            dayplan_core::CoreError::Parse { message } => Self::Parse { message },
            dayplan_core::CoreError::Validation { field, message } => {
                Self::Validation { field, message }
            }
        }
    }
}

/// Result type for application operations
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_parse_error_maps_to_parse() {
        let err: AppError = dayplan_core::CoreError::parse("bad date").into();
        assert!(matches!(err, AppError::Parse { .. }));
        assert_eq!(err.to_string(), "Parse error: bad date");
    }

    #[test]
    fn test_unknown_filter_maps_to_validation() {
        let err: AppError = "someday"
            .parse::<dayplan_core::CategoryFilter>()
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "category"));
    }

    #[test]
    fn test_terminal_error_keeps_context() {
        let err = AppError::terminal(
            "Failed to enable raw mode",
            std::io::Error::other("not a tty"),
        );
        assert_eq!(err.to_string(), "Terminal error: Failed to enable raw mode");
    }
}
