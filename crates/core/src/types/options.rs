//! Option values shared by every descriptor.
//!
//! Requirements, bounds and defaults may be given literally or computed
//! lazily. Lazy forms are resolved on every validate call and never cached
//! on the descriptor.

use std::fmt;
use std::sync::Arc;

use super::validator::Validator;
use super::value::Value;

/// Producer for a [`Resolvable`] option.
pub type Resolver<T> = Arc<dyn Fn() -> Resolvable<T> + Send + Sync>;

/// An option value that is either literal, paired with a custom failure
/// message, or produced on demand.
pub enum Resolvable<T> {
    Literal(T),
    Descriptor { val: T, message: String },
    Resolver(Resolver<T>),
}

/// Outcome of resolving a [`Resolvable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub val: T,
    /// Custom failure message, only set by the descriptor form.
    pub message: Option<String>,
}

/// Whether a field is mandatory.
pub type Requirement = Resolvable<bool>;

/// A min/max limit.
pub type Bound<T> = Resolvable<T>;

impl<T: Clone> Resolvable<T> {
    pub fn literal(val: T) -> Self {
        Self::Literal(val)
    }

    pub fn with_message(val: T, message: impl Into<String>) -> Self {
        Self::Descriptor { val, message: message.into() }
    }

    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn() -> Resolvable<T> + Send + Sync + 'static,
    {
        Self::Resolver(Arc::new(f))
    }

    /// Resolve the option, invoking producers as needed.
    pub fn resolve(&self) -> Resolved<T> {
        match self {
            Self::Literal(val) => Resolved { val: val.clone(), message: None },
            Self::Descriptor { val, message } => {
                Resolved { val: val.clone(), message: Some(message.clone()) }
            }
            Self::Resolver(f) => f().resolve(),
        }
    }
}

impl<T: Clone> Clone for Resolvable<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(val) => Self::Literal(val.clone()),
            Self::Descriptor { val, message } => {
                Self::Descriptor { val: val.clone(), message: message.clone() }
            }
            Self::Resolver(f) => Self::Resolver(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Resolvable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(val) => f.debug_tuple("Literal").field(val).finish(),
            Self::Descriptor { val, message } => f
                .debug_struct("Descriptor")
                .field("val", val)
                .field("message", message)
                .finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl<T> From<T> for Resolvable<T> {
    fn from(val: T) -> Self {
        Self::Literal(val)
    }
}

impl Default for Requirement {
    fn default() -> Self {
        Self::Literal(false)
    }
}

/// Producer for a default value.
pub type DefaultProducer = Arc<dyn Fn() -> Value + Send + Sync>;

/// Initial value of a field.
#[derive(Clone)]
pub enum DefaultValue {
    Literal(Value),
    Producer(DefaultProducer),
}

impl DefaultValue {
    pub fn producer<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::Producer(Arc::new(f))
    }

    /// Materialize the default, invoking the producer if there is one.
    pub fn build(&self) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Producer(f) => f(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl From<Value> for DefaultValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

/// Options every descriptor carries.
#[derive(Debug, Clone, Default)]
pub struct CoreOptions {
    /// Whether the field is mandatory.
    pub required: Requirement,

    /// Initial value of the field.
    pub default: Option<DefaultValue>,

    /// Validator applied to non-empty values.
    pub validator: Option<Validator>,

    /// Whether the field may change once stored. Enforced by the schema
    /// layer, not by the descriptor.
    pub immutable: bool,
}

impl CoreOptions {
    /// Options for a required field with the standard message.
    pub fn required() -> Self {
        Self { required: Requirement::Literal(true), ..Default::default() }
    }

    pub fn with_required(mut self, required: impl Into<Requirement>) -> Self {
        self.required = required.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Literal(default.into()));
        self
    }

    pub fn with_default_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(DefaultValue::producer(f));
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_immutable(mut self, immutable: bool) -> Self {
        self.immutable = immutable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_literal_resolves_without_message() {
        let bound: Bound<f64> = Bound::literal(3.0);
        assert_eq!(bound.resolve(), Resolved { val: 3.0, message: None });
    }

    #[test]
    fn test_descriptor_keeps_message() {
        let req = Requirement::with_message(true, "name please");
        let resolved = req.resolve();
        assert!(resolved.val);
        assert_eq!(resolved.message.as_deref(), Some("name please"));
    }

    #[test]
    fn test_resolver_runs_on_every_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let bound: Bound<f64> = Bound::resolver(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            Bound::literal(n as f64)
        });

        assert_eq!(bound.resolve().val, 0.0);
        assert_eq!(bound.resolve().val, 1.0);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_resolver_may_return_descriptor() {
        let req = Requirement::resolver(|| Requirement::with_message(false, "unused"));
        let resolved = req.resolve();
        assert!(!resolved.val);
        assert_eq!(resolved.message.as_deref(), Some("unused"));
    }

    #[test]
    fn test_default_producer() {
        let default = DefaultValue::producer(|| Value::from("generated"));
        assert_eq!(default.build(), Value::from("generated"));
        assert_eq!(DefaultValue::from(Value::from(7)).build(), Value::from(7));
    }

    #[test]
    fn test_core_options_builders() {
        let opts = CoreOptions::required().with_default(1).with_immutable(true);
        assert!(opts.required.resolve().val);
        assert!(opts.immutable);
        assert!(opts.default.is_some());
        assert!(!CoreOptions::default().required.resolve().val);
    }
}
