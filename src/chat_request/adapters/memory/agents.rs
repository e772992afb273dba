//! In-memory agent directory adapter.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::chat_request::domain::{AgentSubCommand, ChatAgentData};
use crate::chat_request::ports::{
    AgentDirectory, AgentDirectoryError, ChatAgent, SubCommandError, SubCommandResult,
};

/// A chat agent backed by a fixed sub-command list.
///
/// The enumeration normally returns the configured list; tests can script
/// a failure instead to exercise the parser's fallback to plain text.
#[derive(Debug, Clone)]
pub struct InMemoryChatAgent {
    data: ChatAgentData,
    sub_commands: Vec<AgentSubCommand>,
    enumeration_failure: Option<SubCommandError>,
}

impl InMemoryChatAgent {
    /// Creates an agent with no sub-commands.
    #[must_use]
    pub const fn new(data: ChatAgentData) -> Self {
        Self {
            data,
            sub_commands: Vec::new(),
            enumeration_failure: None,
        }
    }

    /// Sets the sub-commands the agent reports.
    #[must_use]
    pub fn with_sub_commands(
        mut self,
        sub_commands: impl IntoIterator<Item = AgentSubCommand>,
    ) -> Self {
        self.sub_commands = sub_commands.into_iter().collect();
        self
    }

    /// Makes every enumeration call fail with `error`.
    #[must_use]
    pub fn with_failing_sub_commands(mut self, error: SubCommandError) -> Self {
        self.enumeration_failure = Some(error);
        self
    }
}

#[async_trait]
impl ChatAgent for InMemoryChatAgent {
    fn data(&self) -> &ChatAgentData {
        &self.data
    }

    async fn sub_commands(&self) -> SubCommandResult<Vec<AgentSubCommand>> {
        if let Some(error) = &self.enumeration_failure {
            return Err(error.clone());
        }
        Ok(self.sub_commands.clone())
    }
}

/// In-memory directory resolving agent mentions case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentDirectory {
    agents: Arc<RwLock<HashMap<String, Arc<InMemoryChatAgent>>>>,
}

impl InMemoryAgentDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory from the given agents.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDirectoryError::DuplicateAgent`] when two agents
    /// share a name, compared case-insensitively.
    pub fn with_agents(
        agents: impl IntoIterator<Item = InMemoryChatAgent>,
    ) -> Result<Self, AgentDirectoryError> {
        let mut by_name = HashMap::new();
        for agent in agents {
            let name = agent.data().name.clone();
            let key = name.as_str().to_ascii_lowercase();
            if by_name.insert(key, Arc::new(agent)).is_some() {
                return Err(AgentDirectoryError::DuplicateAgent(name));
            }
        }
        Ok(Self {
            agents: Arc::new(RwLock::new(by_name)),
        })
    }

    /// Registers one agent.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDirectoryError::DuplicateAgent`] when an agent with
    /// the same name is already registered.
    pub fn register(&self, agent: InMemoryChatAgent) -> Result<(), AgentDirectoryError> {
        let name = agent.data().name.clone();
        let key = name.as_str().to_ascii_lowercase();
        let mut guard = self
            .agents
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if guard.contains_key(&key) {
            return Err(AgentDirectoryError::DuplicateAgent(name));
        }
        guard.insert(key, Arc::new(agent));
        Ok(())
    }

    /// Returns the number of registered agents.
    ///
    /// Returns `0` when the internal lock is poisoned, matching the
    /// fallback behaviour of an empty directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` when no agents are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AgentDirectory for InMemoryAgentDirectory {
    fn agent_named(&self, name: &str) -> Option<Arc<dyn ChatAgent>> {
        let guard = self.agents.read().ok()?;
        let agent = guard.get(&name.to_ascii_lowercase())?;
        let handle = Arc::clone(agent);
        Some(handle as Arc<dyn ChatAgent>)
    }
}
