//! In-memory adapter implementations.
//!
//! Thread-safe registries suitable for embedding the parser in a frontend
//! process and for tests. Registration goes through shared handles, so a
//! registry can keep changing after the parser has been constructed over
//! it; reads fall back to empty results when a lock is poisoned.

mod agents;
mod commands;
mod references;
mod variables;

pub use agents::{InMemoryAgentDirectory, InMemoryChatAgent};
pub use commands::InMemoryCommandRegistry;
pub use references::InMemoryReferenceStore;
pub use variables::InMemoryVariableRegistry;
