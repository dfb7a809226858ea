//! Field type descriptors.
//!
//! This module provides composable descriptors that validate and coerce
//! untyped input values:
//! - Required-ness, defaults and custom validators shared by every type
//! - Casting with a configurable fallback strategy on mismatch
//! - Strict or lenient validation with type-specific bound checks
//!
//! Descriptors can be built in code or from declarative [`FieldDef`]s.
//!
//! # Example
//!
//! ```
//! use smoothie_core::types::{
//!     NumberOptions, NumberType, TypeDescriptor, ValidationStrategy, Value,
//! };
//!
//! let age = NumberType::new("age", NumberOptions::default().with_min(0.0));
//! let value = age.validate(&Value::from("42"), ValidationStrategy::Equal).unwrap();
//! assert_eq!(value, Value::from(42));
//! ```

pub mod array;
pub mod boolean;
pub mod core;
pub mod date;
pub mod definition;
pub mod errors;
pub mod number;
pub mod options;
pub mod registry;
pub mod schema;
pub mod strategy;
pub mod string;
pub mod utils;
pub mod validator;
pub mod value;

// Re-export commonly used types
pub use array::ArrayType;
pub use boolean::{BooleanType, to_boolean};
pub use self::core::{CoreType, TypeDescriptor};
pub use date::{DateOptions, DateType, validate_max_date, validate_min_date};
pub use definition::{BoundDef, BoundValue, FieldDef};
pub use errors::{DefinitionError, ErrorKind, TypeResult, ValidationError};
pub use number::{NumberOptions, NumberType, validate_max_limit, validate_min_limit};
pub use options::{Bound, CoreOptions, DefaultValue, Requirement, Resolvable, Resolved};
pub use registry::{ValidatorRegistry, global_validators, register_validator, unregister_validator};
pub use schema::{FieldType, SchemaType};
pub use strategy::{CastStrategy, ValidationStrategy};
pub use string::{StringOptions, StringType};
pub use validator::{Validator, ValidatorFn, apply_validator};
pub use value::{Value, ValueKind, parse_date, to_iso_string};
