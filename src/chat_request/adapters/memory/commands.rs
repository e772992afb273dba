//! In-memory standalone slash-command registry adapter.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::chat_request::domain::SlashCommandData;
use crate::chat_request::ports::{CommandRegistry, CommandRegistryError, CommandRegistryResult};

/// In-memory registry for standalone slash commands.
///
/// Command names are already lowercase (normalised at construction of
/// [`SlashCommandData`]); listings come back sorted by command name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommandRegistry {
    commands: Arc<RwLock<HashMap<String, SlashCommandData>>>,
}

impl InMemoryCommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from the given commands.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError::DuplicateCommand`] when two entries
    /// share a command name.
    pub fn with_commands(
        commands: impl IntoIterator<Item = SlashCommandData>,
    ) -> CommandRegistryResult<Self> {
        let mut by_name = HashMap::new();
        for command in commands {
            let key = command.command.clone();
            if by_name.insert(key.clone(), command).is_some() {
                return Err(CommandRegistryError::DuplicateCommand(key));
            }
        }
        Ok(Self {
            commands: Arc::new(RwLock::new(by_name)),
        })
    }

    /// Registers one command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError::DuplicateCommand`] when a command
    /// with the same name is already registered.
    pub fn register(&self, command: SlashCommandData) -> CommandRegistryResult<()> {
        let key = command.command.clone();
        let mut guard = self
            .commands
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if guard.contains_key(&key) {
            return Err(CommandRegistryError::DuplicateCommand(key));
        }
        guard.insert(key, command);
        Ok(())
    }

    /// Returns the number of registered commands.
    ///
    /// Returns `0` when the internal lock is poisoned, matching the
    /// fallback behaviour of an empty registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` when no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CommandRegistry for InMemoryCommandRegistry {
    fn commands(&self) -> Vec<SlashCommandData> {
        let Ok(guard) = self.commands.read() else {
            return Vec::new();
        };
        let mut listing: Vec<_> = guard.values().cloned().collect();
        listing.sort_by(|left, right| left.command.cmp(&right.command));
        listing
    }
}
