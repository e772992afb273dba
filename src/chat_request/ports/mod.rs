//! Port trait definitions for the chat request subsystem.
//!
//! Ports define the session-scoped lookup contracts the parser consumes.
//! Adapters implement these ports to connect the parser to agent hosts,
//! tool registries, and completion UIs. Lookup is infallible by contract;
//! only agent sub-command enumeration carries an error channel.

pub mod agents;
pub mod commands;
pub mod references;
pub mod variables;

pub use agents::{
    AgentDirectory, AgentDirectoryError, ChatAgent, SubCommandError, SubCommandResult,
};
pub use commands::{CommandRegistry, CommandRegistryError, CommandRegistryResult};
pub use references::DynamicReferenceSource;
pub use variables::VariableRegistry;
