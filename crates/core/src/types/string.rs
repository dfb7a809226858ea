//! String descriptor.

use super::core::{CoreType, TypeDescriptor};
use super::errors::{TypeResult, ValidationError};
use super::options::{Bound, CoreOptions, Resolvable};
use super::registry::ValidatorRegistry;
use super::strategy::{CastStrategy, ValidationStrategy};
use super::utils;
use super::value::Value;

/// Options for [`StringType`].
#[derive(Debug, Clone, Default)]
pub struct StringOptions {
    pub core: CoreOptions,
    /// Allowed values. Checked after transforms.
    pub enum_values: Option<Resolvable<Vec<String>>>,
    /// Minimum length in characters.
    pub min_length: Option<Bound<usize>>,
    /// Maximum length in characters.
    pub max_length: Option<Bound<usize>>,
    pub trim: bool,
    pub lowercase: bool,
    pub uppercase: bool,
}

impl StringOptions {
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(Resolvable::Literal(values.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_min_length(mut self, min: impl Into<Bound<usize>>) -> Self {
        self.min_length = Some(min.into());
        self
    }

    pub fn with_max_length(mut self, max: impl Into<Bound<usize>>) -> Self {
        self.max_length = Some(max.into());
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
}

/// Text field with optional transforms, allowed values and length limits.
#[derive(Debug, Clone)]
pub struct StringType {
    core: CoreType,
    enum_values: Option<Resolvable<Vec<String>>>,
    min_length: Option<Bound<usize>>,
    max_length: Option<Bound<usize>>,
    trim: bool,
    lowercase: bool,
    uppercase: bool,
}

impl StringType {
    pub const TYPE_NAME: &'static str = "String";

    pub fn new(name: impl Into<String>, options: StringOptions) -> Self {
        Self {
            core: CoreType::new(name, Self::TYPE_NAME, options.core),
            enum_values: options.enum_values,
            min_length: options.min_length,
            max_length: options.max_length,
            trim: options.trim,
            lowercase: options.lowercase,
            uppercase: options.uppercase,
        }
    }

    pub fn enum_values(&self) -> Option<&Resolvable<Vec<String>>> {
        self.enum_values.as_ref()
    }

    /// Apply trim, then lowercase, then uppercase.
    fn transform(&self, s: &str) -> String {
        let s = if self.trim { s.trim() } else { s };
        if self.lowercase {
            s.to_lowercase()
        } else if self.uppercase {
            s.to_uppercase()
        } else {
            s.to_string()
        }
    }

    fn coerce(&self, value: &Value, strategy: ValidationStrategy) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(_) | Value::Bool(_) | Value::Date(_) if !strategy.is_strict() => {
                Some(value.to_js_string())
            }
            _ => None,
        }
    }

    fn check_enum(&self, s: &str) -> Option<String> {
        let allowed = self.enum_values.as_ref()?.resolve();
        if allowed.val.iter().any(|v| v == s) {
            return None;
        }
        Some(allowed.message.unwrap_or_else(|| {
            format!("Property '{}' must be one of [{}]", self.name(), allowed.val.join(", "))
        }))
    }

    fn check_min_length(&self, len: usize) -> Option<String> {
        let min = self.min_length.as_ref()?.resolve();
        if len >= min.val {
            return None;
        }
        Some(min.message.unwrap_or_else(|| {
            format!("Property '{}' is shorter than the minimum allowed length '{}'", self.name(), min.val)
        }))
    }

    fn check_max_length(&self, len: usize) -> Option<String> {
        let max = self.max_length.as_ref()?.resolve();
        if len <= max.val {
            return None;
        }
        Some(max.message.unwrap_or_else(|| {
            format!("Property '{}' is longer than the maximum allowed length '{}'", self.name(), max.val)
        }))
    }
}

impl TypeDescriptor for StringType {
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
        match self.coerce(value, ValidationStrategy::Equal) {
            Some(s) => Ok(Some(Value::String(self.transform(&s)))),
            None => utils::check_cast_strategy(value, strategy, self),
        }
    }

    fn validate_with(
        &self,
        value: &Value,
        strategy: ValidationStrategy,
        validators: &ValidatorRegistry,
    ) -> TypeResult<Value> {
        tracing::trace!(field = self.name(), %strategy, "validating string");
        self.core.validate(value)?;
        if self.is_empty(value) {
            return Ok(value.clone());
        }

        let Some(s) = self.coerce(value, strategy) else {
            return Err(self.core.type_mismatch());
        };
        let s = self.transform(&s);

        let coerced = Value::String(s.clone());
        self.core.check_validator(&coerced, validators)?;

        let len = s.chars().count();
        let errors: Vec<String> = [self.check_enum(&s), self.check_min_length(len), self.check_max_length(len)]
            .into_iter()
            .flatten()
            .collect();
        if !errors.is_empty() {
            return Err(ValidationError::Failed { messages: errors });
        }

        Ok(coerced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::errors::ErrorKind;
    use crate::types::validator::Validator;
    use insta::assert_snapshot;
    use regex::Regex;
    use rstest::rstest;

    fn lenient(ty: &StringType, value: impl Into<Value>) -> TypeResult<Value> {
        ty.validate_with(&value.into(), ValidationStrategy::Equal, &ValidatorRegistry::new())
    }

    fn strict(ty: &StringType, value: impl Into<Value>) -> TypeResult<Value> {
        ty.validate_with(&value.into(), ValidationStrategy::Strict, &ValidatorRegistry::new())
    }

    #[rstest]
    #[case(Value::from("hi"), Some(Value::from("hi")))]
    #[case(Value::from(12), Some(Value::from("12")))]
    #[case(Value::from(1.5), Some(Value::from("1.5")))]
    #[case(Value::from(true), Some(Value::from("true")))]
    #[case(Value::Array(vec![]), None)]
    #[case(Value::Null, None)]
    fn test_cast(#[case] input: Value, #[case] expected: Option<Value>) {
        let ty = StringType::new("s", StringOptions::default());
        assert_eq!(ty.cast(&input, CastStrategy::Drop).unwrap(), expected);
    }

    #[test]
    fn test_cast_applies_transforms() {
        let ty = StringType::new("s", StringOptions::default().with_trim(true).with_uppercase(true));
        assert_eq!(ty.cast(&Value::from("  abc "), CastStrategy::Drop).unwrap(), Some(Value::from("ABC")));
    }

    #[test]
    fn test_strict_requires_string() {
        let ty = StringType::new("title", StringOptions::default());
        let err = strict(&ty, 5).unwrap_err();
        assert_eq!(err.to_string(), "Property 'title' must be of type 'String'");
        assert_eq!(lenient(&ty, 5).unwrap(), Value::from("5"));
        assert_eq!(lenient(&ty, Value::Array(vec![])).unwrap_err().kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_empty_string_is_not_missing() {
        let ty = StringType::new("title", StringOptions { core: CoreOptions::required(), ..Default::default() });
        assert_eq!(strict(&ty, "").unwrap(), Value::from(""));
    }

    #[test]
    fn test_enum() {
        let ty = StringType::new(
            "status",
            StringOptions::default().with_enum(["open", "closed"]).with_trim(true).with_lowercase(true),
        );
        assert_eq!(strict(&ty, " OPEN ").unwrap(), Value::from("open"));
        let err = strict(&ty, "pending").unwrap_err();
        assert_eq!(err.to_string(), "Property 'status' must be one of [open, closed]");
    }

    #[test]
    fn test_enum_resolver_with_message() {
        let opts = StringOptions {
            enum_values: Some(Resolvable::resolver(|| {
                Resolvable::with_message(vec!["a".to_string()], "only a")
            })),
            ..Default::default()
        };
        let ty = StringType::new("letter", opts);
        assert_eq!(strict(&ty, "b").unwrap_err().to_string(), "only a");
    }

    #[test]
    fn test_length_counts_characters() {
        let ty = StringType::new("code", StringOptions::default().with_min_length(2_usize).with_max_length(3_usize));
        assert!(strict(&ty, "ñé").is_ok());
        assert!(strict(&ty, "x").unwrap_err().to_string().contains("shorter than the minimum allowed length '2'"));
        assert!(strict(&ty, "long").unwrap_err().to_string().contains("longer than the maximum allowed length '3'"));
    }

    #[test]
    fn test_all_checks_reported_together() {
        let ty = StringType::new(
            "code",
            StringOptions::default().with_enum(["ab"]).with_min_length(5_usize)
                .with_max_length(Bound::with_message(1_usize, "way too long")),
        );
        let err = strict(&ty, "xyz").unwrap_err();
        assert_snapshot!(err.to_string(), @r"
        Property 'code' must be one of [ab]
        Property 'code' is shorter than the minimum allowed length '5'
        way too long
        ");
    }

    #[test]
    fn test_pattern_sees_transformed_value() {
        let opts = StringOptions {
            core: CoreOptions::default()
                .with_validator(Validator::pattern(Regex::new("^[a-z]+$").unwrap(), "lowercase letters only")),
            lowercase: true,
            ..Default::default()
        };
        let ty = StringType::new("slug", opts);
        assert_eq!(strict(&ty, "Hello").unwrap(), Value::from("hello"));
        assert_eq!(strict(&ty, "he llo").unwrap_err().to_string(), "lowercase letters only");
    }
}
