//! Helpers shared by the concrete descriptors.

use super::core::TypeDescriptor;
use super::errors::TypeResult;
use super::strategy::CastStrategy;
use super::value::Value;

/// Resolve a failed cast according to `strategy`.
pub fn check_cast_strategy<T>(value: &Value, strategy: CastStrategy, ty: &T) -> TypeResult<Option<Value>>
where
    T: TypeDescriptor + ?Sized,
{
    tracing::debug!(
        field = ty.name(),
        type_name = ty.type_name(),
        %strategy,
        kind = %value.kind(),
        "cast fell back to strategy"
    );
    match strategy {
        CastStrategy::Keep | CastStrategy::DefaultOrKeep => Ok(Some(value.clone())),
        CastStrategy::Throw => Err(ty.core().type_mismatch()),
        CastStrategy::Drop | CastStrategy::DefaultOrDrop => Ok(None),
    }
}

/// A number that is neither NaN nor infinite.
pub fn is_number(n: f64) -> bool {
    n.is_finite()
}

/// Whether the value can be read as a valid date.
pub fn is_date_valid(value: &Value) -> bool {
    value.to_date().is_some()
}

/// Cast every item through `item_type`.
///
/// Dropped items become `Null` so positions and length are preserved.
pub fn ensure_array_items_type<T>(items: &[Value], item_type: &T, strategy: CastStrategy) -> TypeResult<Vec<Value>>
where
    T: TypeDescriptor + ?Sized,
{
    items
        .iter()
        .map(|item| Ok(item_type.cast(item, strategy)?.unwrap_or(Value::Null)))
        .collect()
}
