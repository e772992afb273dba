//! Agent directory port and the live agent contract.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::chat_request::domain::{AgentName, AgentSubCommand, ChatAgentData};

/// Result type for sub-command enumeration.
pub type SubCommandResult<T> = Result<T, SubCommandError>;

/// A registered agent capable of owning a chat request.
///
/// The directory resolves a mention to a live handle; the parser keeps the
/// handle for the rest of the scan so a `/command` following the mention
/// can be resolved against the agent's own sub-commands. Enumeration may
/// suspend: the listing can live behind an extension host or a remote
/// process.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    /// Returns the agent's serialisable identity.
    fn data(&self) -> &ChatAgentData;

    /// Enumerates the agent's sub-commands.
    ///
    /// # Errors
    ///
    /// Returns [`SubCommandError`] when the listing cannot be produced. The
    /// parser treats any error as "no sub-command found" and falls back to
    /// plain text.
    async fn sub_commands(&self) -> SubCommandResult<Vec<AgentSubCommand>>;
}

/// Port for resolving agent mentions to live agents.
pub trait AgentDirectory: Send + Sync {
    /// Resolves a mention name to a registered agent.
    ///
    /// Lookup is case-insensitive. Returns `None` for unknown names.
    fn agent_named(&self, name: &str) -> Option<Arc<dyn ChatAgent>>;
}

/// Errors raised while enumerating an agent's sub-commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubCommandError {
    /// The agent is no longer reachable.
    #[error("agent unavailable: {0}")]
    AgentUnavailable(String),

    /// The listing call failed.
    #[error("sub-command enumeration failed: {0}")]
    EnumerationFailed(String),
}

/// Errors raised while building an agent directory.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentDirectoryError {
    /// Two agents were registered under the same name.
    #[error("duplicate agent name: {0}")]
    DuplicateAgent(AgentName),
}
