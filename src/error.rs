//! Error types for the sports agent data store.
//!
//! Every `Display` string is user-facing: the command loop prints it verbatim
//! as feedback, so messages are written as complete sentences.

use thiserror::Error;

/// A raw string was rejected by a value type constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Field that failed, e.g. `"name"` or `"start date"`.
    pub field: &'static str,
    /// Constraint message shown to the user.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw command text could not be turned into a typed command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Missing required prefix, non-empty preamble, or malformed arguments.
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: String },

    /// A single-valued prefix appeared more than once.
    #[error("Multiple values specified for the following single-valued field(s): {}", .prefixes.join(" "))]
    DuplicatePrefix { prefixes: Vec<String> },

    /// First failing field, reported verbatim.
    #[error(transparent)]
    FieldConstraintViolation(#[from] ValidationError),

    /// Command word is not in the parse table.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// A well-formed command could not be applied to the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}")]
    DuplicateEntity(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ReferentialConflict(String),

    #[error("{0}")]
    InvalidRange(String),
}

/// Persistence failures. Raised while loading, these trigger the reset-to-empty policy.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed data file: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Illegal value in data file: {0}")]
    IllegalValue(String),

    #[error("Data file integrity violation: {0}")]
    Integrity(String),
}

impl From<ValidationError> for StorageError {
    fn from(err: ValidationError) -> Self {
        StorageError::IllegalValue(format!("{}: {}", err.field, err.message))
    }
}

/// Top-level error crossing the CLI boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// True for errors the command loop reports and then keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ApiError::Parse(_) | ApiError::Command(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_prefix_message_lists_prefixes_in_order() {
        let err = ParseError::DuplicatePrefix {
            prefixes: vec!["n/".to_string(), "s/".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Multiple values specified for the following single-valued field(s): n/ s/"
        );
    }

    #[test]
    fn field_violation_is_reported_verbatim() {
        let err: ParseError = ValidationError::new("age", "Age is bad").into();
        assert_eq!(err.to_string(), "Age is bad");
    }

    #[test]
    fn recoverable_errors() {
        let parse: ApiError = ParseError::UnknownCommand("x".to_string()).into();
        let command: ApiError = CommandError::NotFound("gone".to_string()).into();
        let config = ApiError::ConfigError("bad".to_string());
        assert!(parse.is_recoverable());
        assert!(command.is_recoverable());
        assert!(!config.is_recoverable());
    }
}
