//! In-memory dynamic-reference store adapter.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::chat_request::domain::{DynamicReference, SessionId};
use crate::chat_request::ports::DynamicReferenceSource;

/// In-memory store of per-session dynamic references.
///
/// Completion UIs register references against a session while the user
/// types; each parse snapshots the session's list once, up front. The
/// store keeps references in registration order per session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceStore {
    references: Arc<RwLock<HashMap<SessionId, Vec<DynamicReference>>>>,
}

impl InMemoryReferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reference against `session`, after any already held.
    pub fn register(&self, session: SessionId, reference: DynamicReference) {
        let mut guard = self
            .references
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.entry(session).or_default().push(reference);
    }

    /// Removes every reference held for `session`.
    pub fn clear_session(&self, session: SessionId) {
        let mut guard = self
            .references
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.remove(&session);
    }

    /// Returns the number of references held across all sessions.
    ///
    /// Returns `0` when the internal lock is poisoned, matching the
    /// fallback behaviour of an empty store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.references
            .read()
            .map(|guard| guard.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Returns `true` when no references are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DynamicReferenceSource for InMemoryReferenceStore {
    fn references_for(&self, session: SessionId) -> Vec<DynamicReference> {
        self.references
            .read()
            .ok()
            .and_then(|guard| guard.get(&session).cloned())
            .unwrap_or_default()
    }
}
