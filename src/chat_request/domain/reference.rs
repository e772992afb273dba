//! Pre-registered dynamic reference records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ChatRequestDomainError, TextRange};

/// A dynamic reference registered ahead of parsing.
///
/// Completion UIs register references while the user types; each record
/// anchors at an exact editor position. A `#name:argument` candidate in
/// the message resolves only when a record's start position equals the
/// candidate's start position. The payload is opaque to the parser and
/// travels into the emitted segment unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicReference {
    range: TextRange,
    data: Value,
}

impl DynamicReference {
    /// Creates a reference anchored at `range.start`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatRequestDomainError::UnorderedReferenceRange`] when the
    /// range's end precedes its start.
    pub fn new(range: TextRange, data: Value) -> Result<Self, ChatRequestDomainError> {
        if !range.is_ordered() {
            return Err(ChatRequestDomainError::UnorderedReferenceRange {
                start: range.start,
                end: range.end,
            });
        }
        Ok(Self { range, data })
    }

    /// Returns the anchored editor range.
    #[must_use]
    pub const fn range(&self) -> TextRange {
        self.range
    }

    /// Returns the opaque payload.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }
}
