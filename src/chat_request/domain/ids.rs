//! Domain identifier newtypes for chat request parsing.
//!
//! These types wrap UUIDs to prevent accidental mixing of identifier types
//! across subsystem boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for the chat session a message belongs to.
///
/// Dynamic references are registered per session; the parser snapshots
/// the references of the session named here before scanning.
///
/// # Examples
///
/// ```
/// use aalto::chat_request::domain::SessionId;
///
/// let id = SessionId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a session identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

/// Note: This implementation generates a new random UUID on each call,
/// which is non-standard behaviour for `Default`. Use `SessionId::new()`
/// if the intent to generate a random ID should be explicit.
impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for SessionId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
