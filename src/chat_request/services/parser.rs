//! The chat request parser service.
//!
//! A single left-to-right scan over the message. At each character the
//! parser tracks the editor position; at an eligible leader it runs one
//! matcher family and, on a match, fills any uncovered input with a
//! synthetic text segment before appending the matched one. Parsing is
//! total: matchers decline rather than fail, and declined candidates stay
//! plain text.

use std::sync::Arc;

use crate::chat_request::domain::scan;
use crate::chat_request::domain::{
    DynamicReference, OffsetRange, ParsedChatRequest, Position, Segment, SessionId, TextRange,
    TextSegment,
};
use crate::chat_request::ports::{
    AgentDirectory, ChatAgent, CommandRegistry, DynamicReferenceSource, VariableRegistry,
};

use super::matchers::{self, MatchContext};

/// Parses chat messages into ordered, gap-free typed segments.
///
/// The parser is generic over the four lookup ports and holds shared
/// handles to them. It keeps no state between calls: every parse builds
/// fresh local state, so one parser can serve many sessions concurrently.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use aalto::chat_request::adapters::memory::{
///     InMemoryAgentDirectory, InMemoryCommandRegistry, InMemoryReferenceStore,
///     InMemoryVariableRegistry,
/// };
/// use aalto::chat_request::domain::{SessionId, SlashCommandData};
/// use aalto::chat_request::services::ChatRequestParser;
///
/// let commands = InMemoryCommandRegistry::with_commands([SlashCommandData::new(
///     "explain",
///     "Explain the selection",
/// )])
/// .expect("unique command names");
///
/// let parser = ChatRequestParser::new(
///     Arc::new(InMemoryAgentDirectory::new()),
///     Arc::new(InMemoryVariableRegistry::new()),
///     Arc::new(commands),
///     Arc::new(InMemoryReferenceStore::new()),
/// );
///
/// let runtime = tokio::runtime::Builder::new_current_thread()
///     .build()
///     .expect("runtime should build");
/// let parsed = runtime.block_on(parser.parse(SessionId::new(), "/explain this"));
///
/// assert!(parsed.slash_command().is_some());
/// ```
#[derive(Clone)]
pub struct ChatRequestParser<D, V, C, R>
where
    D: AgentDirectory,
    V: VariableRegistry,
    C: CommandRegistry,
    R: DynamicReferenceSource,
{
    agents: Arc<D>,
    variables: Arc<V>,
    commands: Arc<C>,
    references: Arc<R>,
}

impl<D, V, C, R> ChatRequestParser<D, V, C, R>
where
    D: AgentDirectory,
    V: VariableRegistry,
    C: CommandRegistry,
    R: DynamicReferenceSource,
{
    /// Creates a parser over the given lookup ports.
    #[must_use]
    pub const fn new(
        agents: Arc<D>,
        variables: Arc<V>,
        commands: Arc<C>,
        references: Arc<R>,
    ) -> Self {
        Self {
            agents,
            variables,
            commands,
            references,
        }
    }

    /// Parses `message` into a gap-free sequence of typed segments.
    ///
    /// The session's dynamic references are snapshotted once, before the
    /// scan and before any suspension point, so concurrent registration
    /// cannot affect the result. The only suspension is sub-command
    /// enumeration when a `/command` follows an agent mention; dropping
    /// the returned future there abandons the parse.
    pub async fn parse(&self, session: SessionId, message: &str) -> ParsedChatRequest {
        let snapshot = self.references.references_for(session);

        let mut state = ScanState::new();
        for (offset, character) in message.char_indices() {
            if scan::is_leader(character) && scan::leader_eligible(state.previous) {
                let matched = self
                    .segment_at(message, offset, character, &snapshot, &state)
                    .await;
                if let Some(outcome) = matched {
                    if let Some(handle) = outcome.agent {
                        state.agent = Some(handle);
                    }
                    state.emit(message, outcome.segment);
                }
            }
            state.advance(character);
        }
        state.finish(message)
    }

    /// Runs the matcher family selected by `leader` at one candidate
    /// offset. Only the command family may suspend.
    async fn segment_at(
        &self,
        message: &str,
        offset: usize,
        leader: char,
        snapshot: &[DynamicReference],
        state: &ScanState,
    ) -> Option<MatchOutcome> {
        let context = state.context(message, offset);
        match leader {
            // Variable first; the dynamic-reference matcher only sees a
            // `#` candidate the variable matcher declined.
            scan::VARIABLE_LEADER => matchers::match_variable(&context, &*self.variables)
                .map(|segment| MatchOutcome::plain(Segment::Variable(segment)))
                .or_else(|| {
                    matchers::match_dynamic_reference(&context, snapshot)
                        .map(|segment| MatchOutcome::plain(Segment::DynamicReference(segment)))
                }),
            scan::AGENT_LEADER => {
                matchers::match_agent(&context, &*self.agents).map(|matched| MatchOutcome {
                    segment: Segment::Agent(matched.segment),
                    agent: Some(matched.handle),
                })
            }
            scan::COMMAND_LEADER => {
                matchers::match_command(&context, &*self.commands, state.agent.as_deref())
                    .await
                    .map(MatchOutcome::plain)
            }
            _ => None,
        }
    }
}

/// A matched segment plus the agent handle resolved alongside it.
struct MatchOutcome {
    segment: Segment,
    agent: Option<Arc<dyn ChatAgent>>,
}

impl MatchOutcome {
    const fn plain(segment: Segment) -> Self {
        Self {
            segment,
            agent: None,
        }
    }
}

/// Mutable scan state: emitted segments, coverage bookkeeping, and the
/// continuously tracked editor position.
struct ScanState {
    segments: Vec<Segment>,
    agent: Option<Arc<dyn ChatAgent>>,
    /// Byte offset one past the last emitted segment.
    covered_end: usize,
    /// Editor position one past the last emitted segment.
    covered_end_position: Position,
    /// Editor position of the character the outer loop is visiting.
    position: Position,
    /// The previously visited character, for the word-boundary gate.
    previous: Option<char>,
}

impl ScanState {
    const fn new() -> Self {
        Self {
            segments: Vec::new(),
            agent: None,
            covered_end: 0,
            covered_end_position: Position::start(),
            position: Position::start(),
            previous: None,
        }
    }

    /// Immutable matcher view of the scan at `offset`.
    fn context<'a>(&'a self, message: &'a str, offset: usize) -> MatchContext<'a> {
        MatchContext {
            message,
            rest: message.get(offset..).unwrap_or_default(),
            offset,
            position: self.position,
            emitted: &self.segments,
            covered_end: self.covered_end,
        }
    }

    /// Position tracking runs over every character, matched spans
    /// included.
    const fn advance(&mut self, character: char) {
        self.position = self.position.advanced(character);
        self.previous = Some(character);
    }

    /// Appends `segment`, synthesising a text segment for any gap between
    /// the previously covered input and the segment's start.
    fn emit(&mut self, message: &str, segment: Segment) {
        let offsets = segment.offset_range();
        if offsets.start > self.covered_end {
            let gap = OffsetRange::new(self.covered_end, offsets.start);
            let content = message.get(gap.start..gap.end).unwrap_or_default();
            self.segments.push(Segment::Text(TextSegment::new(
                gap,
                TextRange::new(self.covered_end_position, segment.editor_range().start),
                content,
            )));
        }
        self.covered_end = offsets.end;
        self.covered_end_position = segment.editor_range().end;
        self.segments.push(segment);
    }

    /// Closes the scan: any trailing remainder becomes a final text
    /// segment, and the segments wrap into the parsed aggregate.
    fn finish(mut self, message: &str) -> ParsedChatRequest {
        if self.covered_end < message.len() {
            let offsets = OffsetRange::new(self.covered_end, message.len());
            let content = message.get(self.covered_end..).unwrap_or_default();
            self.segments.push(Segment::Text(TextSegment::new(
                offsets,
                TextRange::new(self.covered_end_position, self.position),
                content,
            )));
        }
        ParsedChatRequest::new(message, self.segments)
    }
}
