//! Shared test helpers for in-memory parser integration tests.

use std::io;
use std::sync::Arc;

use aalto::chat_request::adapters::memory::{
    InMemoryAgentDirectory, InMemoryChatAgent, InMemoryCommandRegistry, InMemoryReferenceStore,
    InMemoryVariableRegistry,
};
use aalto::chat_request::domain::{
    AgentName, AgentSubCommand, ChatAgentData, DynamicReference, ParsedChatRequest, Position,
    Segment, SessionId, SlashCommandData, TextRange, VariableName,
};
use aalto::chat_request::services::ChatRequestParser;
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;

/// Parser type wired to the in-memory adapters.
pub type TestParser = ChatRequestParser<
    InMemoryAgentDirectory,
    InMemoryVariableRegistry,
    InMemoryCommandRegistry,
    InMemoryReferenceStore,
>;

/// A parser over populated in-memory registries, with the shared handles
/// kept so tests can keep registering against them.
pub struct ParserFixture {
    /// The parser under test.
    pub parser: TestParser,
    /// Shared agent directory handle.
    pub directory: Arc<InMemoryAgentDirectory>,
    /// Shared variable registry handle.
    pub variables: Arc<InMemoryVariableRegistry>,
    /// Shared command registry handle.
    pub commands: Arc<InMemoryCommandRegistry>,
    /// Shared reference store handle.
    pub references: Arc<InMemoryReferenceStore>,
    /// Session used by the scenario.
    pub session: SessionId,
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a parser over a populated world: agent `reviewer` with
/// sub-commands `fix` and `explain`, variables `selection` and `diff`,
/// and standalone commands `explain` and `help`.
#[fixture]
pub fn parser_fixture() -> ParserFixture {
    let reviewer = InMemoryChatAgent::new(ChatAgentData::new(
        AgentName::new("reviewer").expect("valid agent name"),
        "Reviews changes",
    ))
    .with_sub_commands([
        AgentSubCommand::new("fix", "Apply the suggested fix"),
        AgentSubCommand::new("explain", "Explain the finding"),
    ]);
    let directory = Arc::new(
        InMemoryAgentDirectory::with_agents([reviewer]).expect("unique agent names"),
    );

    let variables = Arc::new(InMemoryVariableRegistry::with_variables([
        VariableName::new("selection").expect("valid variable name"),
        VariableName::new("diff").expect("valid variable name"),
    ]));

    let commands = Arc::new(
        InMemoryCommandRegistry::with_commands([
            SlashCommandData::new("explain", "Explain the selection"),
            SlashCommandData::new("help", "Show help"),
        ])
        .expect("unique command names"),
    );

    let references = Arc::new(InMemoryReferenceStore::new());

    let parser = ChatRequestParser::new(
        Arc::clone(&directory),
        Arc::clone(&variables),
        Arc::clone(&commands),
        Arc::clone(&references),
    );

    ParserFixture {
        parser,
        directory,
        variables,
        commands,
        references,
        session: SessionId::new(),
    }
}

/// Builds a dynamic reference anchored at the given line and column.
#[must_use]
pub fn anchored_reference(line: u32, column: u32, payload: Value) -> DynamicReference {
    let start = Position::new(line, column);
    DynamicReference::new(TextRange::new(start, start), payload).expect("ordered range")
}

/// Asserts the segmentation invariants: ascending adjacent offsets and
/// exact coverage of the original text.
pub fn verify_segmentation(parsed: &ParsedChatRequest) {
    let mut expected_start = 0;
    for segment in parsed.segments() {
        let offsets = segment.offset_range();
        assert_eq!(
            offsets.start, expected_start,
            "segment must start where the previous one ended"
        );
        assert!(offsets.end >= offsets.start, "segment range must be ordered");
        expected_start = offsets.end;
    }
    assert_eq!(
        expected_start,
        parsed.text().len(),
        "segments must cover the whole message"
    );

    let rebuilt: String = parsed
        .segments()
        .iter()
        .map(|segment| parsed.segment_text(segment))
        .collect();
    assert_eq!(rebuilt, parsed.text());
}

/// Counts segments matching a predicate.
#[must_use]
pub fn count_segments(parsed: &ParsedChatRequest, predicate: impl Fn(&Segment) -> bool) -> usize {
    parsed.segments().iter().filter(|s| predicate(s)).count()
}
