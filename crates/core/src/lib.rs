#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::return_self_not_must_use,
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::trivially_copy_pass_by_ref
)]

pub mod types;

pub use types::{CastStrategy, SchemaType, TypeDescriptor, ValidationError, ValidationStrategy, Value};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
