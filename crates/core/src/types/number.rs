//! Number descriptor.

use super::core::{CoreType, TypeDescriptor};
use super::errors::{TypeResult, ValidationError};
use super::options::{Bound, CoreOptions, Resolved};
use super::registry::ValidatorRegistry;
use super::strategy::{CastStrategy, ValidationStrategy};
use super::utils;
use super::value::Value;

/// Options for [`NumberType`].
#[derive(Debug, Clone, Default)]
pub struct NumberOptions {
    pub core: CoreOptions,
    /// Only allow integer values.
    pub int_val: bool,
    /// Smallest accepted value (inclusive).
    pub min: Option<Bound<f64>>,
    /// Largest accepted value (inclusive).
    pub max: Option<Bound<f64>>,
}

impl NumberOptions {
    pub fn with_min(mut self, min: impl Into<Bound<f64>>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn with_max(mut self, max: impl Into<Bound<f64>>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn with_int_val(mut self, int_val: bool) -> Self {
        self.int_val = int_val;
        self
    }
}

/// Check a value against a resolved minimum.
///
/// NaN never violates a bound.
pub fn validate_min_limit(val: f64, min: &Resolved<f64>, property: &str) -> Option<String> {
    if min.val > val {
        Some(min.message.clone().unwrap_or_else(|| {
            format!(
                "Property '{property}' is less than the minimum allowed value of '{}'",
                Value::Number(min.val)
            )
        }))
    } else {
        None
    }
}

/// Check a value against a resolved maximum.
pub fn validate_max_limit(val: f64, max: &Resolved<f64>, property: &str) -> Option<String> {
    if max.val < val {
        Some(max.message.clone().unwrap_or_else(|| {
            format!(
                "Property '{property}' is more than the maximum allowed value of '{}'",
                Value::Number(max.val)
            )
        }))
    } else {
        None
    }
}

/// Numeric field with optional integer-only and min/max constraints.
#[derive(Debug, Clone)]
pub struct NumberType {
    core: CoreType,
    int_val: bool,
    min: Option<Bound<f64>>,
    max: Option<Bound<f64>>,
}

impl NumberType {
    pub const TYPE_NAME: &'static str = "Number";

    pub fn new(name: impl Into<String>, options: NumberOptions) -> Self {
        Self {
            core: CoreType::new(name, Self::TYPE_NAME, options.core),
            int_val: options.int_val,
            min: options.min,
            max: options.max,
        }
    }

    pub fn int_val(&self) -> bool {
        self.int_val
    }

    pub fn min(&self) -> Option<&Bound<f64>> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&Bound<f64>> {
        self.max.as_ref()
    }

    fn check_min(&self, val: f64) -> Option<String> {
        let min = self.min.as_ref()?.resolve();
        validate_min_limit(val, &min, self.core.name())
    }

    fn check_max(&self, val: f64) -> Option<String> {
        let max = self.max.as_ref()?.resolve();
        validate_max_limit(val, &max, self.core.name())
    }
}

impl TypeDescriptor for NumberType {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn core(&self) -> &CoreType {
        &self.core
    }

    fn cast(&self, value: &Value, strategy: CastStrategy) -> TypeResult<Option<Value>> {
        let n = value.to_number();
        if utils::is_number(n) {
            Ok(Some(Value::Number(n)))
        } else {
            utils::check_cast_strategy(value, strategy, self)
        }
    }

    fn validate_with(
        &self,
        value: &Value,
        strategy: ValidationStrategy,
        validators: &ValidatorRegistry,
    ) -> TypeResult<Value> {
        tracing::trace!(field = self.name(), %strategy, "validating number");
        self.core.validate(value)?;
        if self.is_empty(value) {
            return Ok(value.clone());
        }

        let n = value.to_number();
        let wrong_type = if strategy.is_strict() {
            !matches!(value, Value::Number(_))
        } else {
            n.is_nan()
        };
        if wrong_type {
            return Err(self.core.type_mismatch());
        }

        let mut errors = Vec::new();
        if self.int_val && n % 1.0 != 0.0 {
            errors.push(format!("Property {} only allows Integer values", self.name()));
        }

        let coerced = Value::Number(n);
        self.core.check_validator(&coerced, validators)?;

        errors.extend(self.check_min(n));
        errors.extend(self.check_max(n));
        if !errors.is_empty() {
            return Err(ValidationError::Failed { messages: errors });
        }

        Ok(coerced)
    }
}
