//! Shared world state for chat request parsing BDD scenarios.

use std::sync::Arc;

use aalto::chat_request::adapters::memory::{
    InMemoryAgentDirectory, InMemoryCommandRegistry, InMemoryReferenceStore,
    InMemoryVariableRegistry,
};
use aalto::chat_request::domain::{ParsedChatRequest, SessionId};
use aalto::chat_request::services::ChatRequestParser;
use rstest::fixture;
use serde_json::{Value, json};

/// Parser type used by the BDD world.
pub type TestParser = ChatRequestParser<
    InMemoryAgentDirectory,
    InMemoryVariableRegistry,
    InMemoryCommandRegistry,
    InMemoryReferenceStore,
>;

/// Scenario world for chat request parsing behaviour tests.
pub struct ParserWorld {
    /// The parser under test.
    pub parser: TestParser,
    /// Shared agent directory handle for Given steps.
    pub directory: Arc<InMemoryAgentDirectory>,
    /// Shared variable registry handle for Given steps.
    pub variables: Arc<InMemoryVariableRegistry>,
    /// Shared command registry handle for Given steps.
    pub commands: Arc<InMemoryCommandRegistry>,
    /// Shared reference store handle for Given steps.
    pub references: Arc<InMemoryReferenceStore>,
    /// Session the scenario parses against.
    pub session: SessionId,
    /// Result of the last parse.
    pub last_parsed: Option<ParsedChatRequest>,
}

impl ParserWorld {
    /// Creates a world over empty registries.
    #[must_use]
    pub fn new() -> Self {
        let directory = Arc::new(InMemoryAgentDirectory::new());
        let variables = Arc::new(InMemoryVariableRegistry::new());
        let commands = Arc::new(InMemoryCommandRegistry::new());
        let references = Arc::new(InMemoryReferenceStore::new());
        let parser = ChatRequestParser::new(
            Arc::clone(&directory),
            Arc::clone(&variables),
            Arc::clone(&commands),
            Arc::clone(&references),
        );
        Self {
            parser,
            directory,
            variables,
            commands,
            references,
            session: SessionId::new(),
            last_parsed: None,
        }
    }
}

impl Default for ParserWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ParserWorld {
    ParserWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// The payload every scenario-registered dynamic reference carries.
#[must_use]
pub fn reference_payload() -> Value {
    json!({"uri": "src/main.rs", "kind": "file"})
}
