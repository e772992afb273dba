//! Standalone slash-command registry port.

use thiserror::Error;

use crate::chat_request::domain::SlashCommandData;

/// Result type for command registry construction.
pub type CommandRegistryResult<T> = Result<T, CommandRegistryError>;

/// Port for listing standalone slash commands.
///
/// Standalone commands apply only when the message carries no agent
/// mention. The listing is synchronous: the registry is expected to hold
/// its definitions locally.
pub trait CommandRegistry: Send + Sync {
    /// Returns the registered commands.
    fn commands(&self) -> Vec<SlashCommandData>;
}

/// Errors raised while building a command registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandRegistryError {
    /// Two entries shared the same command name.
    #[error("duplicate slash command: {0}")]
    DuplicateCommand(String),
}
