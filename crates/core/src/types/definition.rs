//! Declarative field definitions.
//!
//! A [`FieldDef`] is the serializable form of a descriptor, suitable for
//! YAML or JSON. [`FieldDef::build`] turns it into a [`SchemaType`].

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::array::ArrayType;
use super::boolean::BooleanType;
use super::date::{DateOptions, DateType};
use super::errors::DefinitionError;
use super::number::{NumberOptions, NumberType};
use super::options::{Bound, CoreOptions, Requirement, Resolvable};
use super::schema::{FieldType, SchemaType};
use super::string::{StringOptions, StringType};
use super::validator::Validator;
use super::value::{Value, date_from_millis, parse_date};

/// Raw bound value: a number, or a string holding a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundValue {
    Number(f64),
    Text(String),
}

/// A min/max limit, optionally with a custom failure message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundDef {
    Plain(BoundValue),
    Described { val: BoundValue, message: String },
}

impl BoundDef {
    fn parts(&self) -> (&BoundValue, Option<&str>) {
        match self {
            Self::Plain(val) => (val, None),
            Self::Described { val, message } => (val, Some(message)),
        }
    }

    fn to_bound<T>(&self, convert: impl FnOnce(&BoundValue) -> Option<T>) -> Option<Bound<T>>
    where
        T: Clone,
    {
        let (val, message) = self.parts();
        let val = convert(val)?;
        Some(match message {
            Some(message) => Bound::with_message(val, message),
            None => Bound::literal(val),
        })
    }
}

/// Serializable definition of a single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    /// Field type. Defaults to string.
    #[serde(rename = "type", default)]
    pub field_type: Option<FieldType>,

    #[serde(default)]
    pub required: bool,

    /// Replaces the standard "is required" message.
    #[serde(default)]
    pub required_message: Option<String>,

    #[serde(default)]
    pub default: Option<Value>,

    #[serde(default)]
    pub immutable: bool,

    /// Name of a registered validator.
    #[serde(default)]
    pub validator: Option<String>,

    /// Regex the value's string form must match.
    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub pattern_message: Option<String>,

    // Number and date constraints
    #[serde(default)]
    pub min: Option<BoundDef>,

    #[serde(default)]
    pub max: Option<BoundDef>,

    #[serde(default, alias = "integer")]
    pub int_val: bool,

    // Array constraints
    #[serde(default)]
    pub items: Option<Box<FieldDef>>,

    // String constraints
    #[serde(default, rename = "enum")]
    pub enum_values: Option<Vec<String>>,

    #[serde(default)]
    pub enum_message: Option<String>,

    #[serde(default)]
    pub min_length: Option<usize>,

    #[serde(default)]
    pub max_length: Option<usize>,

    #[serde(default)]
    pub trim: bool,

    #[serde(default)]
    pub lowercase: bool,

    #[serde(default)]
    pub uppercase: bool,
}

impl FieldDef {
    pub fn new(field_type: FieldType) -> Self {
        Self { field_type: Some(field_type), ..Default::default() }
    }

    /// Get the effective field type, defaulting to String if not specified.
    pub fn effective_type(&self) -> FieldType {
        self.field_type.unwrap_or(FieldType::String)
    }

    /// Build the descriptor for a field called `name`.
    pub fn build(&self, name: &str) -> Result<SchemaType, DefinitionError> {
        let field_type = self.effective_type();
        self.check_supported(name, field_type)?;
        let core = self.core_options(name)?;

        let ty = match field_type {
            FieldType::Array => {
                let items = self
                    .items
                    .as_ref()
                    .ok_or_else(|| DefinitionError::MissingItems { field: name.to_string() })?;
                ArrayType::new(name, items.build(name)?, core).into()
            }
            FieldType::Boolean => BooleanType::new(name, core).into(),
            FieldType::Date => {
                let options = DateOptions {
                    core,
                    min: self.date_bound(name, "min", self.min.as_ref())?,
                    max: self.date_bound(name, "max", self.max.as_ref())?,
                };
                DateType::new(name, options).into()
            }
            FieldType::Number => {
                let options = NumberOptions {
                    core,
                    int_val: self.int_val,
                    min: self.number_bound(name, "min", self.min.as_ref())?,
                    max: self.number_bound(name, "max", self.max.as_ref())?,
                };
                NumberType::new(name, options).into()
            }
            FieldType::String => {
                let enum_values = self.enum_values.clone().map(|values| match &self.enum_message {
                    Some(message) => Resolvable::with_message(values, message.as_str()),
                    None => Resolvable::literal(values),
                });
                let options = StringOptions {
                    core,
                    enum_values,
                    min_length: self.min_length.map(Bound::literal),
                    max_length: self.max_length.map(Bound::literal),
                    trim: self.trim,
                    lowercase: self.lowercase,
                    uppercase: self.uppercase,
                };
                StringType::new(name, options).into()
            }
        };
        Ok(ty)
    }

    /// Type-specific options that are set on this definition.
    fn set_options(&self) -> Vec<&'static str> {
        let flags = [
            ("min", self.min.is_some()),
            ("max", self.max.is_some()),
            ("int_val", self.int_val),
            ("items", self.items.is_some()),
            ("enum", self.enum_values.is_some()),
            ("enum_message", self.enum_message.is_some()),
            ("min_length", self.min_length.is_some()),
            ("max_length", self.max_length.is_some()),
            ("trim", self.trim),
            ("lowercase", self.lowercase),
            ("uppercase", self.uppercase),
        ];
        flags.into_iter().filter(|(_, set)| *set).map(|(option, _)| option).collect()
    }

    fn check_supported(&self, name: &str, field_type: FieldType) -> Result<(), DefinitionError> {
        let allowed: &[&str] = match field_type {
            FieldType::Array => &["items"],
            FieldType::Boolean => &[],
            FieldType::Date => &["min", "max"],
            FieldType::Number => &["min", "max", "int_val"],
            FieldType::String => &[
                "enum",
                "enum_message",
                "min_length",
                "max_length",
                "trim",
                "lowercase",
                "uppercase",
            ],
        };
        match self.set_options().into_iter().find(|option| !allowed.contains(option)) {
            Some(option) => Err(DefinitionError::UnsupportedOption {
                field: name.to_string(),
                option: option.to_string(),
                field_type: field_type.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn core_options(&self, name: &str) -> Result<CoreOptions, DefinitionError> {
        let required = match &self.required_message {
            Some(message) => Requirement::with_message(self.required, message.as_str()),
            None => Requirement::literal(self.required),
        };

        let validator = match (&self.validator, &self.pattern) {
            (Some(_), Some(_)) => {
                return Err(DefinitionError::ConflictingValidators { field: name.to_string() });
            }
            (Some(named), None) => Some(Validator::named(named.as_str())),
            (None, Some(pattern)) => {
                let regexp = Regex::new(pattern).map_err(|source| DefinitionError::InvalidPattern {
                    field: name.to_string(),
                    source,
                })?;
                let message = self
                    .pattern_message
                    .clone()
                    .unwrap_or_else(|| format!("Property '{name}' does not match pattern '{pattern}'"));
                Some(Validator::pattern(regexp, message))
            }
            (None, None) => None,
        };

        Ok(CoreOptions {
            required,
            default: self.default.clone().map(Into::into),
            validator,
            immutable: self.immutable,
        })
    }

    fn number_bound(
        &self,
        name: &str,
        option: &str,
        def: Option<&BoundDef>,
    ) -> Result<Option<Bound<f64>>, DefinitionError> {
        let Some(def) = def else {
            return Ok(None);
        };
        let bound = def.to_bound(|val| match val {
            BoundValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        });
        bound.map(Some).ok_or_else(|| DefinitionError::InvalidBound {
            field: name.to_string(),
            option: option.to_string(),
            reason: "expected a finite number".to_string(),
        })
    }

    fn date_bound(
        &self,
        name: &str,
        option: &str,
        def: Option<&BoundDef>,
    ) -> Result<Option<Bound<DateTime<Utc>>>, DefinitionError> {
        let Some(def) = def else {
            return Ok(None);
        };
        let bound = def.to_bound(|val| match val {
            BoundValue::Text(s) => parse_date(s),
            BoundValue::Number(ms) => date_from_millis(*ms),
        });
        bound.map(Some).ok_or_else(|| DefinitionError::InvalidBound {
            field: name.to_string(),
            option: option.to_string(),
            reason: "expected a date string or epoch milliseconds".to_string(),
        })
    }
}
