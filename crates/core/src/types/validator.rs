//! Field validators.
//!
//! A validator is one of three forms: a reference to a registered
//! validator, an inline function, or a regex pattern with a failure
//! message. [`apply_validator`] normalizes all three into one call.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::errors::{TypeResult, ValidationError};
use super::registry::ValidatorRegistry;
use super::value::Value;

/// Validation function. Returns an error to reject the value.
pub type ValidatorFn = Arc<dyn Fn(&Value) -> TypeResult<()> + Send + Sync>;

/// Validator attached to a field.
#[derive(Clone)]
pub enum Validator {
    /// Name of a validator in the registry.
    Named(String),
    /// Inline validation function.
    Function(ValidatorFn),
    /// Regex matched against the value's string form.
    Pattern { regexp: Regex, message: String },
}

impl Validator {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value) -> TypeResult<()> + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    pub fn pattern(regexp: Regex, message: impl Into<String>) -> Self {
        Self::Pattern { regexp, message: message.into() }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Pattern { regexp, message } => f
                .debug_struct("Pattern")
                .field("regexp", &regexp.as_str())
                .field("message", message)
                .finish(),
        }
    }
}

/// Apply a validator to a value.
///
/// Named validators are looked up in `registry` on every call. No
/// validator is a no-op; an unregistered name is an error.
pub fn apply_validator(
    value: &Value,
    validator: Option<&Validator>,
    field: &str,
    registry: &ValidatorRegistry,
) -> TypeResult<()> {
    let Some(validator) = validator else {
        return Ok(());
    };

    match validator {
        Validator::Named(name) => {
            let Some(f) = registry.get(name) else {
                tracing::warn!(validator = %name, field, "validator is not registered");
                return Err(ValidationError::UnknownValidator {
                    validator: name.clone(),
                    field: field.to_string(),
                });
            };
            f(value)
        }
        Validator::Function(f) => f(value),
        Validator::Pattern { regexp, message } => {
            if regexp.is_match(&value.to_js_string()) {
                Ok(())
            } else {
                Err(ValidationError::failed(message.clone()))
            }
        }
    }
}
