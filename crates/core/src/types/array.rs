//! Array descriptor.

use super::core::{CoreType, TypeDescriptor};
use super::errors::TypeResult;
use super::options::CoreOptions;
use super::registry::ValidatorRegistry;
use super::schema::SchemaType;
use super::strategy::{CastStrategy, ValidationStrategy};
use super::utils;
use super::value::Value;

/// Ordered sequence whose elements all share one item type.
#[derive(Debug, Clone)]
pub struct ArrayType {
    core: CoreType,
    item_type: Box<SchemaType>,
}

impl ArrayType {
    pub const TYPE_NAME: &'static str = "Array";

    pub fn new(name: impl Into<String>, item_type: impl Into<SchemaType>, options: CoreOptions) -> Self {
        Self {
            core: CoreType::new(name, Self::TYPE_NAME, options),
            item_type: Box::new(item_type.into()),
        }
    }

    pub fn item_type(&self) -> &SchemaType {
        &self.item_type
    }
}

impl TypeDescriptor for ArrayType {
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
        match value {
            Value::Array(items) => {
                let items = utils::ensure_array_items_type(items, self.item_type.as_ref(), strategy)?;
                Ok(Some(Value::Array(items)))
            }
            _ => utils::check_cast_strategy(value, strategy, self),
        }
    }

    /// The field validator sees the whole array; items are then validated
    /// one by one and the first failure aborts.
    fn validate_with(
        &self,
        value: &Value,
        strategy: ValidationStrategy,
        validators: &ValidatorRegistry,
    ) -> TypeResult<Value> {
        tracing::trace!(field = self.name(), %strategy, "validating array");
        self.core.validate(value)?;
        if self.is_empty(value) {
            return Ok(value.clone());
        }

        let Value::Array(items) = value else {
            return Err(self.core.type_mismatch());
        };

        self.core.check_validator(value, validators)?;

        let items = items
            .iter()
            .map(|item| self.item_type.validate_with(item, strategy, validators))
            .collect::<TypeResult<Vec<_>>>()?;
        Ok(Value::Array(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::errors::{ErrorKind, ValidationError};
    use crate::types::number::{NumberOptions, NumberType};
    use crate::types::validator::Validator;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn numbers(options: CoreOptions) -> ArrayType {
        ArrayType::new("scores", NumberType::new("score", NumberOptions::default()), options)
    }

    fn array(items: Vec<Value>) -> Value {
        Value::Array(items)
    }

    #[test]
    fn test_cast_items() {
        let ty = numbers(CoreOptions::default());
        let cast = ty
            .cast(&array(vec!["1".into(), "two".into(), 3.into()]), CastStrategy::DefaultOrDrop)
            .unwrap();
        assert_eq!(cast, Some(array(vec![1.into(), Value::Null, 3.into()])));
    }

    #[test]
    fn test_cast_item_throw_propagates() {
        let ty = numbers(CoreOptions::default());
        let err = ty.cast(&array(vec!["two".into()]), CastStrategy::Throw).unwrap_err();
        assert_eq!(err.to_string(), "Property 'score' must be of type 'Number'");
    }

    #[test]
    fn test_cast_non_array_falls_back() {
        let ty = numbers(CoreOptions::default());
        assert_eq!(ty.cast(&Value::from("1,2"), CastStrategy::Drop).unwrap(), None);
        assert_eq!(ty.cast(&Value::from("1,2"), CastStrategy::Keep).unwrap(), Some(Value::from("1,2")));
        assert_eq!(
            ty.cast(&Value::from("1,2"), CastStrategy::Throw).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn test_validate_preserves_order_and_length() {
        let ty = numbers(CoreOptions::default());
        let validated = ty
            .validate_with(
                &array(vec!["3".into(), 1.into(), "2".into()]),
                ValidationStrategy::Equal,
                &ValidatorRegistry::new(),
            )
            .unwrap();
        assert_eq!(validated, array(vec![3.into(), 1.into(), 2.into()]));
    }

    #[test]
    fn test_strategy_reaches_items() {
        let ty = numbers(CoreOptions::default());
        let err = ty
            .validate_with(&array(vec![1.into(), "2".into()]), ValidationStrategy::Strict, &ValidatorRegistry::new())
            .unwrap_err();
        assert_eq!(err, ValidationError::type_mismatch("score", "Number"));
    }

    #[test]
    fn test_validate_non_array() {
        let ty = numbers(CoreOptions::default());
        let err = ty
            .validate_with(&Value::from(1), ValidationStrategy::Equal, &ValidatorRegistry::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "Property 'scores' must be of type 'Array'");
    }

    #[test]
    fn test_empty_and_required() {
        let optional = numbers(CoreOptions::default());
        let registry = ValidatorRegistry::new();
        assert_eq!(
            optional.validate_with(&Value::Null, ValidationStrategy::Strict, &registry).unwrap(),
            Value::Null
        );

        let required = numbers(CoreOptions::required());
        let err = required.validate_with(&Value::Null, ValidationStrategy::Strict, &registry).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequiredField);

        // An empty array is a value, not an empty field
        assert_eq!(
            required.validate_with(&array(vec![]), ValidationStrategy::Strict, &registry).unwrap(),
            array(vec![])
        );
    }

    #[test]
    fn test_validator_runs_once_on_whole_array() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let validator = Validator::function(move |v| {
            counter.fetch_add(1, Ordering::SeqCst);
            match v.as_array() {
                Some(items) if items.len() <= 2 => Ok(()),
                _ => Err(ValidationError::failed("at most two scores")),
            }
        });
        let ty = numbers(CoreOptions::default().with_validator(validator));
        let registry = ValidatorRegistry::new();

        assert!(ty.validate_with(&array(vec![1.into(), 2.into()]), ValidationStrategy::Strict, &registry).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let err = ty
            .validate_with(&array(vec![1.into(), 2.into(), 3.into()]), ValidationStrategy::Strict, &registry)
            .unwrap_err();
        assert_eq!(err.to_string(), "at most two scores");
    }

    #[test]
    fn test_item_failure_aborts() {
        let item = NumberType::new("score", NumberOptions::default().with_max(10.0));
        let ty = ArrayType::new("scores", item, CoreOptions::default());
        let err = ty
            .validate_with(&array(vec![1.into(), 20.into(), 30.into()]), ValidationStrategy::Strict, &ValidatorRegistry::new())
            .unwrap_err();
        assert_eq!(err.messages().len(), 1);
        assert!(err.to_string().contains("'score'"));
    }

    #[test]
    fn test_nested_arrays() {
        let inner = ArrayType::new("row", NumberType::new("cell", NumberOptions::default()), CoreOptions::default());
        let grid = ArrayType::new("grid", inner, CoreOptions::default());
        let value = array(vec![array(vec!["1".into()]), array(vec![2.into(), 3.into()])]);

        let validated = grid.validate_with(&value, ValidationStrategy::Equal, &ValidatorRegistry::new()).unwrap();
        assert_eq!(validated, array(vec![array(vec![1.into()]), array(vec![2.into(), 3.into()])]));
    }
}
