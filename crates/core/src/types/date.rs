//! Date descriptor.

use chrono::{DateTime, Utc};

use super::core::{CoreType, TypeDescriptor};
use super::errors::{TypeResult, ValidationError};
use super::options::{Bound, CoreOptions, Resolved};
use super::registry::ValidatorRegistry;
use super::strategy::{CastStrategy, ValidationStrategy};
use super::utils;
use super::value::{Value, ValueKind, to_iso_string};

/// Options for [`DateType`].
#[derive(Debug, Clone, Default)]
pub struct DateOptions {
    pub core: CoreOptions,
    /// Earliest accepted date (inclusive).
    pub min: Option<Bound<DateTime<Utc>>>,
    /// Latest accepted date (inclusive).
    pub max: Option<Bound<DateTime<Utc>>>,
}

impl DateOptions {
    pub fn with_min(mut self, min: impl Into<Bound<DateTime<Utc>>>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn with_max(mut self, max: impl Into<Bound<DateTime<Utc>>>) -> Self {
        self.max = Some(max.into());
        self
    }
}

pub fn validate_min_date(value: &DateTime<Utc>, min: &Resolved<DateTime<Utc>>, property: &str) -> Option<String> {
    if min.val > *value {
        Some(min.message.clone().unwrap_or_else(|| {
            format!("Property {property} cannot allow dates before {}", to_iso_string(&min.val))
        }))
    } else {
        None
    }
}

pub fn validate_max_date(value: &DateTime<Utc>, max: &Resolved<DateTime<Utc>>, property: &str) -> Option<String> {
    if max.val < *value {
        Some(max.message.clone().unwrap_or_else(|| {
            format!("Property {property} cannot allow dates after {}", to_iso_string(&max.val))
        }))
    } else {
        None
    }
}

/// Calendar date field with optional inclusive bounds.
#[derive(Debug, Clone)]
pub struct DateType {
    core: CoreType,
    min: Option<Bound<DateTime<Utc>>>,
    max: Option<Bound<DateTime<Utc>>>,
}

impl DateType {
    pub const TYPE_NAME: &'static str = "Date";

    pub fn new(name: impl Into<String>, options: DateOptions) -> Self {
        Self {
            core: CoreType::new(name, Self::TYPE_NAME, options.core),
            min: options.min,
            max: options.max,
        }
    }

    pub fn min(&self) -> Option<&Bound<DateTime<Utc>>> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&Bound<DateTime<Utc>>> {
        self.max.as_ref()
    }

    /// Read a value as a date under the given strategy.
    fn coerce(&self, value: &Value, strategy: ValidationStrategy) -> Option<DateTime<Utc>> {
        match value {
            Value::Date(d) => Some(*d),
            Value::String(_) | Value::Number(_) if !strategy.is_strict() => value.to_date(),
            _ => None,
        }
    }

    fn check_min_date(&self, value: &DateTime<Utc>) -> Option<String> {
        let min = self.min.as_ref()?.resolve();
        validate_min_date(value, &min, self.core.name())
    }

    fn check_max_date(&self, value: &DateTime<Utc>) -> Option<String> {
        let max = self.max.as_ref()?.resolve();
        validate_max_date(value, &max, self.core.name())
    }
}

impl TypeDescriptor for DateType {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn core(&self) -> &CoreType {
        &self.core
    }

    /// Truthy non-date defaults are converted the same way `cast` converts
    /// values. Falsy defaults (`""`, `0`, `false`) are returned as given.
    fn build_default(&self) -> TypeResult<Option<Value>> {
        match self.core.build_default() {
            None => Ok(None),
            Some(value) if !value.is_truthy() || value.is(ValueKind::Date) => Ok(Some(value)),
            Some(value) => value
                .to_date()
                .map(|d| Some(Value::Date(d)))
                .ok_or_else(|| self.core.type_mismatch()),
        }
    }

    fn cast(&self, value: &Value, strategy: CastStrategy) -> TypeResult<Option<Value>> {
        match value.to_date() {
            Some(date) => Ok(Some(Value::Date(date))),
            None => utils::check_cast_strategy(value, strategy, self),
        }
    }

    fn validate_with(
        &self,
        value: &Value,
        strategy: ValidationStrategy,
        validators: &ValidatorRegistry,
    ) -> TypeResult<Value> {
        tracing::trace!(field = self.name(), %strategy, "validating date");
        self.core.validate(value)?;
        if self.is_empty(value) {
            return Ok(value.clone());
        }

        let Some(date) = self.coerce(value, strategy) else {
            return Err(self.core.type_mismatch());
        };

        let coerced = Value::Date(date);
        self.core.check_validator(&coerced, validators)?;

        let errors: Vec<String> =
            [self.check_min_date(&date), self.check_max_date(&date)].into_iter().flatten().collect();
        if !errors.is_empty() {
            return Err(ValidationError::Failed { messages: errors });
        }

        Ok(coerced)
    }
}
