//! Standalone slash-command descriptor.

use serde::{Deserialize, Serialize};

/// One entry of the standalone slash-command registry.
///
/// Standalone commands are available without an agent mention. The command
/// name is normalised to lowercase at construction and matched exactly
/// against scanned tokens.
///
/// # Examples
///
/// ```
/// use aalto::chat_request::domain::SlashCommandData;
///
/// let command = SlashCommandData::new("Explain", "Explain the selection");
/// assert_eq!(command.command, "explain");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashCommandData {
    /// The command name without the leading slash, lowercase.
    pub command: String,
    /// Human-readable description.
    pub description: String,
}

impl SlashCommandData {
    /// Creates a command entry, lowercasing the command name.
    #[must_use]
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into().to_ascii_lowercase(),
            description: description.into(),
        }
    }
}
