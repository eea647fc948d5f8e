//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Empty namespace given to a constructor or to `child`
    #[error("Invalid namespace: it must not be empty")]
    InvalidNamespace,

    /// Level name or ordinal outside DEBUG/INFO/WARN/ERROR
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// The translated namespace pattern was rejected by the regex engine
    #[error("Invalid namespace pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An environment variable holds bytes that are not valid UTF-8
    #[error("Environment variable {name} is not valid unicode: {value:?}")]
    EnvNotUnicode { name: String, value: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid level error carrying the offending value
    pub fn invalid_level(value: impl ToString) -> Self {
        LoggerError::InvalidLevel {
            value: value.to_string(),
        }
    }

    /// Create a pattern error
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        LoggerError::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }
}
