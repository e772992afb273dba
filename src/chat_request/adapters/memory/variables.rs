//! In-memory variable registry adapter.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::chat_request::domain::VariableName;
use crate::chat_request::ports::VariableRegistry;

/// In-memory variable registry with case-insensitive membership.
///
/// Duplicate registrations collapse silently; membership is the only
/// question the parser ever asks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVariableRegistry {
    names: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryVariableRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing `names`.
    #[must_use]
    pub fn with_variables(names: impl IntoIterator<Item = VariableName>) -> Self {
        let lowered = names
            .into_iter()
            .map(|name| name.as_str().to_ascii_lowercase())
            .collect();
        Self {
            names: Arc::new(RwLock::new(lowered)),
        }
    }

    /// Registers one variable name.
    pub fn register(&self, name: &VariableName) {
        let mut guard = self.names.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(name.as_str().to_ascii_lowercase());
    }

    /// Returns the number of registered variables.
    ///
    /// Returns `0` when the internal lock is poisoned, matching the
    /// fallback behaviour of an empty registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` when no variables are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VariableRegistry for InMemoryVariableRegistry {
    fn has_variable(&self, name: &str) -> bool {
        self.names
            .read()
            .is_ok_and(|guard| guard.contains(&name.to_ascii_lowercase()))
    }
}
