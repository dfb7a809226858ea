//! Registry of named validators.
//!
//! The registry must be populated before any descriptor references a
//! validator by name. A process-wide instance backs
//! [`TypeDescriptor::validate`](super::TypeDescriptor::validate); tests and
//! embedders can pass their own to `validate_with`.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use super::errors::TypeResult;
use super::validator::ValidatorFn;
use super::value::Value;

/// Named validators available to [`Validator::Named`](super::Validator::Named).
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<String, ValidatorFn>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator, replacing any previous one with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&Value) -> TypeResult<()> + Send + Sync + 'static,
    {
        self.validators.insert(name.into(), Arc::new(f));
    }

    /// Get a validator by name.
    pub fn get(&self, name: &str) -> Option<ValidatorFn> {
        self.validators.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Remove a validator, returning whether it was registered.
    pub fn remove(&mut self, name: &str) -> bool {
        self.validators.remove(name).is_some()
    }

    /// List registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry").field("validators", &self.names()).finish()
    }
}

static GLOBAL: LazyLock<RwLock<Arc<ValidatorRegistry>>> =
    LazyLock::new(|| RwLock::new(Arc::new(ValidatorRegistry::new())));

/// Snapshot of the process-wide registry.
///
/// The snapshot is detached from the lock, so validators may register
/// other validators without deadlocking.
pub fn global_validators() -> Arc<ValidatorRegistry> {
    let guard = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Register a validator in the process-wide registry.
pub fn register_validator<F>(name: impl Into<String>, f: F)
where
    F: Fn(&Value) -> TypeResult<()> + Send + Sync + 'static,
{
    let name = name.into();
    tracing::debug!(validator = %name, "registering validator");
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    Arc::make_mut(&mut guard).register(name, f);
}

/// Remove a validator from the process-wide registry.
pub fn unregister_validator(name: &str) -> bool {
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    Arc::make_mut(&mut guard).remove(name)
}
