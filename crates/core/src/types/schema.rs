//! Field type tags and the closed family of descriptors.

use serde::{Deserialize, Serialize};

use super::array::ArrayType;
use super::boolean::BooleanType;
use super::core::{CoreType, TypeDescriptor};
use super::date::DateType;
use super::errors::TypeResult;
use super::number::NumberType;
use super::registry::ValidatorRegistry;
use super::strategy::{CastStrategy, ValidationStrategy};
use super::string::StringType;
use super::value::Value;

/// Type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Ordered list of items of one type.
    #[serde(alias = "list")]
    Array,
    #[serde(alias = "bool")]
    Boolean,
    /// Calendar date or timestamp.
    #[serde(alias = "datetime")]
    Date,
    /// Numeric value (integer or float).
    #[serde(alias = "num", alias = "int", alias = "integer", alias = "float")]
    Number,
    #[serde(alias = "str")]
    String,
}

impl FieldType {
    /// Label used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Array => ArrayType::TYPE_NAME,
            Self::Boolean => BooleanType::TYPE_NAME,
            Self::Date => DateType::TYPE_NAME,
            Self::Number => NumberType::TYPE_NAME,
            Self::String => StringType::TYPE_NAME,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "array" | "list" => Ok(Self::Array),
            "boolean" | "bool" => Ok(Self::Boolean),
            "date" | "datetime" => Ok(Self::Date),
            "number" | "num" | "int" | "integer" | "float" => Ok(Self::Number),
            "string" | "str" => Ok(Self::String),
            _ => Err(format!("unknown field type: {s}")),
        }
    }
}

/// Any built-in descriptor.
#[derive(Debug, Clone)]
pub enum SchemaType {
    Array(ArrayType),
    Boolean(BooleanType),
    Date(DateType),
    Number(NumberType),
    String(StringType),
}

macro_rules! dispatch {
    ($self:ident, $ty:ident => $body:expr) => {
        match $self {
            SchemaType::Array($ty) => $body,
            SchemaType::Boolean($ty) => $body,
            SchemaType::Date($ty) => $body,
            SchemaType::Number($ty) => $body,
            SchemaType::String($ty) => $body,
        }
    };
}

impl SchemaType {
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Array(_) => FieldType::Array,
            Self::Boolean(_) => FieldType::Boolean,
            Self::Date(_) => FieldType::Date,
            Self::Number(_) => FieldType::Number,
            Self::String(_) => FieldType::String,
        }
    }
}

impl TypeDescriptor for SchemaType {
    fn name(&self) -> &str {
        dispatch!(self, ty => ty.name())
    }

    fn type_name(&self) -> &'static str {
        dispatch!(self, ty => ty.type_name())
    }

    fn core(&self) -> &CoreType {
        dispatch!(self, ty => ty.core())
    }

    fn cast(&self, value: &Value, strategy: CastStrategy) -> TypeResult<Option<Value>> {
        dispatch!(self, ty => ty.cast(value, strategy))
    }

    fn validate_with(
        &self,
        value: &Value,
        strategy: ValidationStrategy,
        validators: &ValidatorRegistry,
    ) -> TypeResult<Value> {
        dispatch!(self, ty => ty.validate_with(value, strategy, validators))
    }

    fn build_default(&self) -> TypeResult<Option<Value>> {
        dispatch!(self, ty => ty.build_default())
    }

    fn is_empty(&self, value: &Value) -> bool {
        dispatch!(self, ty => ty.is_empty(value))
    }
}

impl From<ArrayType> for SchemaType {
    fn from(ty: ArrayType) -> Self {
        Self::Array(ty)
    }
}

impl From<BooleanType> for SchemaType {
    fn from(ty: BooleanType) -> Self {
        Self::Boolean(ty)
    }
}

impl From<DateType> for SchemaType {
    fn from(ty: DateType) -> Self {
        Self::Date(ty)
    }
}

impl From<NumberType> for SchemaType {
    fn from(ty: NumberType) -> Self {
        Self::Number(ty)
    }
}

impl From<StringType> for SchemaType {
    fn from(ty: StringType) -> Self {
        Self::String(ty)
    }
}
