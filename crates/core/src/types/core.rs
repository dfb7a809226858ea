//! The contract every descriptor satisfies, and the behavior they share.

use super::errors::{TypeResult, ValidationError};
use super::options::{CoreOptions, DefaultValue};
use super::registry::{ValidatorRegistry, global_validators};
use super::strategy::{CastStrategy, ValidationStrategy};
use super::validator::apply_validator;
use super::value::Value;

/// Shared validate/cast interface of a field type descriptor.
///
/// `validate` is the authoritative path and fails on bad data. `cast` is
/// the tolerant path: it only fails under [`CastStrategy::Throw`], and
/// returns `None` when the strategy drops the value.
pub trait TypeDescriptor {
    /// Field name within the parent schema.
    fn name(&self) -> &str;

    /// Type label used in error messages, e.g. `"Number"`.
    fn type_name(&self) -> &'static str;

    /// Shared state: name, type label and core options.
    fn core(&self) -> &CoreType;

    /// Coerce a value to this type, falling back per `strategy`.
    fn cast(&self, value: &Value, strategy: CastStrategy) -> TypeResult<Option<Value>>;

    /// Validate against an explicit validator registry.
    fn validate_with(
        &self,
        value: &Value,
        strategy: ValidationStrategy,
        validators: &ValidatorRegistry,
    ) -> TypeResult<Value>;

    /// Validate using the process-wide validator registry.
    fn validate(&self, value: &Value, strategy: ValidationStrategy) -> TypeResult<Value> {
        self.validate_with(value, strategy, &global_validators())
    }

    /// Materialize the configured default, if any.
    fn build_default(&self) -> TypeResult<Option<Value>> {
        Ok(self.core().build_default())
    }

    fn is_empty(&self, value: &Value) -> bool {
        self.core().is_empty(value)
    }
}

/// Name, type label and options common to all descriptors.
#[derive(Debug, Clone)]
pub struct CoreType {
    name: String,
    type_name: &'static str,
    options: CoreOptions,
}

impl CoreType {
    pub fn new(name: impl Into<String>, type_name: &'static str, options: CoreOptions) -> Self {
        Self { name: name.into(), type_name, options }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn options(&self) -> &CoreOptions {
        &self.options
    }

    pub fn is_immutable(&self) -> bool {
        self.options.immutable
    }

    /// Fail when the value is empty and the field is required.
    ///
    /// Non-empty values pass untouched; type checks are left to the
    /// concrete descriptor.
    pub fn validate(&self, value: &Value) -> TypeResult<()> {
        if self.is_empty(value)
            && let Some(message) = self.check_required()
        {
            return Err(ValidationError::Required { field: self.name.clone(), message });
        }
        Ok(())
    }

    /// Resolve the requirement. Returns the failure message when required.
    pub fn check_required(&self) -> Option<String> {
        let resolved = self.options.required.resolve();
        if !resolved.val {
            return None;
        }
        Some(resolved.message.unwrap_or_else(|| format!("Property '{}' is required", self.name)))
    }

    /// Run the field validator, if any.
    pub fn check_validator(&self, value: &Value, validators: &ValidatorRegistry) -> TypeResult<()> {
        apply_validator(value, self.options.validator.as_ref(), &self.name, validators)
    }

    pub fn build_default(&self) -> Option<Value> {
        self.options.default.as_ref().map(DefaultValue::build)
    }

    /// Null values are empty; `0`, `""` and `false` are not.
    pub fn is_empty(&self, value: &Value) -> bool {
        value.is_null()
    }

    pub fn type_mismatch(&self) -> ValidationError {
        ValidationError::type_mismatch(&self.name, self.type_name)
    }
}
