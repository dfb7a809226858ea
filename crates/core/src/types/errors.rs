//! Error types for type validation and field definitions.

use thiserror::Error;

/// Errors raised while validating or casting a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// An empty value on a required field.
    #[error("{message}")]
    Required { field: String, message: String },

    /// Value shape disagrees with the declared type.
    #[error("Property '{field}' must be of type '{expected}'")]
    TypeMismatch { field: String, expected: String },

    /// A validator or bound check rejected the value.
    #[error("{}", .messages.join("\n"))]
    Failed { messages: Vec<String> },

    /// A named validator is not registered.
    #[error("Validator '{validator}' for field '{field}' does not exist.")]
    UnknownValidator { validator: String, field: String },
}

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequiredField,
    TypeMismatch,
    ValidationFailure,
    UnknownValidator,
}

impl ValidationError {
    /// Create a validation failure with a single message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed { messages: vec![message.into()] }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::TypeMismatch { field: field.into(), expected: expected.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Required { .. } => ErrorKind::RequiredField,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::Failed { .. } => ErrorKind::ValidationFailure,
            Self::UnknownValidator { .. } => ErrorKind::UnknownValidator,
        }
    }

    /// Individual failure messages. Single-message kinds yield one entry.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Failed { messages } => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Result type for validate and cast operations.
pub type TypeResult<T> = Result<T, ValidationError>;

/// Errors that occur when building a descriptor from a field definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Array field without an item definition.
    #[error("array field '{field}' must define 'items'")]
    MissingItems { field: String },

    /// Bound value has the wrong shape for the field type.
    #[error("invalid {option} bound for field '{field}': {reason}")]
    InvalidBound { field: String, option: String, reason: String },

    /// Regex pattern does not compile.
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// Option set on a field type that does not support it.
    #[error("option '{option}' is not supported by {field_type} field '{field}'")]
    UnsupportedOption { field: String, option: String, field_type: String },

    /// Both a named validator and a pattern were given.
    #[error("field '{field}' defines both 'validator' and 'pattern'")]
    ConflictingValidators { field: String },
}
