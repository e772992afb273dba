//! Dynamic-reference snapshot port.

use crate::chat_request::domain::{DynamicReference, SessionId};

/// Port for snapshotting a session's dynamic references.
///
/// Completion UIs register references against a session while the user
/// types. The parser calls this exactly once per parse, before its only
/// suspension point, so concurrent registration cannot change the result
/// mid-scan.
pub trait DynamicReferenceSource: Send + Sync {
    /// Returns the session's references in registration order.
    ///
    /// The returned vector is the parse's snapshot; later mutation of the
    /// session's references must not affect it.
    fn references_for(&self, session: SessionId) -> Vec<DynamicReference>;
}
