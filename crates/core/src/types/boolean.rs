//! Boolean descriptor.

use super::core::{CoreType, TypeDescriptor};
use super::errors::TypeResult;
use super::options::CoreOptions;
use super::registry::ValidatorRegistry;
use super::strategy::{CastStrategy, ValidationStrategy};
use super::utils;
use super::value::Value;

/// Read a value as a boolean if it is one of the recognised forms.
pub fn to_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) if *n == 1.0 => Some(true),
        Value::Number(n) if *n == 0.0 => Some(false),
        Value::String(s) => match s.as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// True/false field.
#[derive(Debug, Clone)]
pub struct BooleanType {
    core: CoreType,
}

impl BooleanType {
    pub const TYPE_NAME: &'static str = "Boolean";

    pub fn new(name: impl Into<String>, options: CoreOptions) -> Self {
        Self { core: CoreType::new(name, Self::TYPE_NAME, options) }
    }
}

impl TypeDescriptor for BooleanType {
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
        match to_boolean(value) {
            Some(b) => Ok(Some(Value::Bool(b))),
            None => utils::check_cast_strategy(value, strategy, self),
        }
    }

    fn validate_with(
        &self,
        value: &Value,
        strategy: ValidationStrategy,
        validators: &ValidatorRegistry,
    ) -> TypeResult<Value> {
        tracing::trace!(field = self.name(), %strategy, "validating boolean");
        self.core.validate(value)?;
        if self.is_empty(value) {
            return Ok(value.clone());
        }

        let b = match value {
            Value::Bool(b) => *b,
            _ if strategy.is_strict() => return Err(self.core.type_mismatch()),
            _ => to_boolean(value).ok_or_else(|| self.core.type_mismatch())?,
        };

        let coerced = Value::Bool(b);
        self.core.check_validator(&coerced, validators)?;
        Ok(coerced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::errors::{ErrorKind, ValidationError};
    use crate::types::validator::Validator;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(true), Some(true))]
    #[case(Value::from("true"), Some(true))]
    #[case(Value::from("1"), Some(true))]
    #[case(Value::from("yes"), Some(true))]
    #[case(Value::from(1), Some(true))]
    #[case(Value::from(false), Some(false))]
    #[case(Value::from("false"), Some(false))]
    #[case(Value::from("0"), Some(false))]
    #[case(Value::from("no"), Some(false))]
    #[case(Value::from(0), Some(false))]
    #[case(Value::from("YES"), None)]
    #[case(Value::from(2), None)]
    #[case(Value::Null, None)]
    fn test_to_boolean(#[case] input: Value, #[case] expected: Option<bool>) {
        assert_eq!(to_boolean(&input), expected);
    }

    #[test]
    fn test_cast_falls_back() {
        let ty = BooleanType::new("done", CoreOptions::default());
        assert_eq!(ty.cast(&Value::from("yes"), CastStrategy::Drop).unwrap(), Some(Value::from(true)));
        assert_eq!(ty.cast(&Value::from("maybe"), CastStrategy::Drop).unwrap(), None);
        assert_eq!(ty.cast(&Value::from("maybe"), CastStrategy::Keep).unwrap(), Some(Value::from("maybe")));
    }

    #[test]
    fn test_strict_and_lenient() {
        let ty = BooleanType::new("done", CoreOptions::default());
        let registry = ValidatorRegistry::new();

        let err = ty.validate_with(&Value::from("yes"), ValidationStrategy::Strict, &registry).unwrap_err();
        assert_eq!(err.to_string(), "Property 'done' must be of type 'Boolean'");
        assert_eq!(
            ty.validate_with(&Value::from("yes"), ValidationStrategy::Equal, &registry).unwrap(),
            Value::from(true)
        );
        assert_eq!(
            ty.validate_with(&Value::from("maybe"), ValidationStrategy::Equal, &registry).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn test_required_false_is_a_value() {
        let ty = BooleanType::new("done", CoreOptions::required());
        let registry = ValidatorRegistry::new();
        assert_eq!(
            ty.validate_with(&Value::from(false), ValidationStrategy::Strict, &registry).unwrap(),
            Value::from(false)
        );
        assert_eq!(
            ty.validate_with(&Value::Null, ValidationStrategy::Strict, &registry).unwrap_err().kind(),
            ErrorKind::RequiredField
        );
    }

    #[test]
    fn test_named_validator() {
        let mut registry = ValidatorRegistry::new();
        registry.register("must_accept", |v: &Value| match v.as_bool() {
            Some(true) => Ok(()),
            _ => Err(ValidationError::failed("terms must be accepted")),
        });
        let ty = BooleanType::new("terms", CoreOptions::default().with_validator(Validator::named("must_accept")));

        assert!(ty.validate_with(&Value::from("1"), ValidationStrategy::Equal, &registry).is_ok());
        let err = ty.validate_with(&Value::from(0), ValidationStrategy::Equal, &registry).unwrap_err();
        assert_eq!(err.to_string(), "terms must be accepted");
    }
}
