//! Validated variable name type.

use super::ChatRequestDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a variable name.
const MAX_NAME_LENGTH: usize = 100;

/// Validated variable reference name.
///
/// Variables appear in messages as `#name`, optionally followed by a
/// numeric argument (`#selection:3`). Case is preserved as registered;
/// the registry decides case sensitivity on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableName(String);

impl VariableName {
    /// Creates a validated variable name.
    ///
    /// The input is trimmed. Only alphanumeric characters, hyphens, and
    /// underscores are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ChatRequestDomainError::EmptyVariableName`] when the value
    /// is empty after trimming,
    /// [`ChatRequestDomainError::InvalidVariableName`] when it contains
    /// characters outside `[A-Za-z0-9_-]`, or
    /// [`ChatRequestDomainError::VariableNameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ChatRequestDomainError> {
        let raw = value.into();
        let trimmed = raw.trim().to_owned();

        if trimmed.is_empty() {
            return Err(ChatRequestDomainError::EmptyVariableName);
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(ChatRequestDomainError::VariableNameTooLong(raw));
        }

        let is_valid = trimmed
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'));

        if !is_valid {
            return Err(ChatRequestDomainError::InvalidVariableName(raw));
        }

        Ok(Self(trimmed))
    }

    /// Returns the variable name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VariableName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
