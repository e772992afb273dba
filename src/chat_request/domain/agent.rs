//! Agent identity types.

use super::ChatRequestDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an agent name.
const MAX_NAME_LENGTH: usize = 100;

/// Validated agent mention name.
///
/// Agent names appear in messages as `!name` (e.g. `!reviewer`,
/// `!release-bot`). Case is preserved as registered; the directory decides
/// case sensitivity on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentName(String);

impl AgentName {
    /// Creates a validated agent name.
    ///
    /// The input is trimmed. Only alphanumeric characters, hyphens, and
    /// underscores are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ChatRequestDomainError::EmptyAgentName`] when the value is
    /// empty after trimming, [`ChatRequestDomainError::InvalidAgentName`]
    /// when it contains characters outside `[A-Za-z0-9_-]`, or
    /// [`ChatRequestDomainError::AgentNameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ChatRequestDomainError> {
        let raw = value.into();
        let trimmed = raw.trim().to_owned();

        if trimmed.is_empty() {
            return Err(ChatRequestDomainError::EmptyAgentName);
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(ChatRequestDomainError::AgentNameTooLong(raw));
        }

        if !is_valid_identifier(&trimmed) {
            return Err(ChatRequestDomainError::InvalidAgentName(raw));
        }

        Ok(Self(trimmed))
    }

    /// Returns the agent name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialisable identity of a registered chat agent.
///
/// Embedded in agent segments so consumers can render and route without
/// holding the live agent handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAgentData {
    /// The agent's mention name.
    pub name: AgentName,
    /// Human-readable description shown in pickers and hovers.
    pub description: String,
}

impl ChatAgentData {
    /// Creates agent identity data.
    #[must_use]
    pub fn new(name: AgentName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
        }
    }
}

/// One sub-command offered by a chat agent.
///
/// # Examples
///
/// ```
/// use aalto::chat_request::domain::AgentSubCommand;
///
/// let sub_command = AgentSubCommand::new("fix", "Apply the suggested fix");
/// assert_eq!(sub_command.name, "fix");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSubCommand {
    /// The sub-command name as written after the slash.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

impl AgentSubCommand {
    /// Creates a sub-command entry.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

fn is_valid_identifier(value: &str) -> bool {
    value
        .chars()
        .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'))
}
