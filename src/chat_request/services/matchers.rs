//! Matcher rules for candidate segments.
//!
//! One matcher family runs per eligible leader offset. Each matcher
//! receives an immutable view of the scan so far and either produces a
//! fully-ranged segment or declines, letting the candidate fall back to
//! plain text. Matchers never mutate shared state.

use std::sync::Arc;

use crate::chat_request::domain::scan::{self, TokenSpan};
use crate::chat_request::domain::{
    AgentSegment, AgentSubcommandSegment, DynamicReference, DynamicReferenceSegment, OffsetRange,
    Position, Segment, SlashCommandSegment, TextRange, VariableSegment,
};
use crate::chat_request::ports::{AgentDirectory, ChatAgent, CommandRegistry, VariableRegistry};

/// Immutable view of the scan at one candidate offset.
pub(super) struct MatchContext<'a> {
    /// The whole message under parse.
    pub message: &'a str,
    /// The message from the candidate offset onwards.
    pub rest: &'a str,
    /// Byte offset of the candidate leader.
    pub offset: usize,
    /// Editor position of the candidate leader.
    pub position: Position,
    /// Segments emitted so far, in message order.
    pub emitted: &'a [Segment],
    /// Byte offset one past the last emitted segment (0 when none).
    pub covered_end: usize,
}

impl MatchContext<'_> {
    /// Byte and editor ranges of a token anchored at this candidate.
    ///
    /// Tokens never contain newlines, so the editor range stays on the
    /// candidate's line.
    const fn ranges(&self, span: TokenSpan) -> (OffsetRange, TextRange) {
        let offsets = OffsetRange::new(self.offset, self.offset + span.byte_len);
        let range = TextRange::new(self.position, self.position.shifted(span.char_count));
        (offsets, range)
    }

    /// Returns `true` when only whitespace separates the last emitted
    /// segment from this candidate.
    fn preceded_by_whitespace_only(&self) -> bool {
        self.message
            .get(self.covered_end..self.offset)
            .is_some_and(|between| between.chars().all(char::is_whitespace))
    }
}

/// A resolved agent mention plus the live handle it resolved to.
pub(super) struct AgentMatch {
    /// The segment to emit.
    pub segment: AgentSegment,
    /// The handle later used for sub-command resolution.
    pub handle: Arc<dyn ChatAgent>,
}

/// Matches `!name` when the directory resolves the name and nothing
/// meaningful precedes the mention.
pub(super) fn match_agent(
    context: &MatchContext<'_>,
    directory: &dyn AgentDirectory,
) -> Option<AgentMatch> {
    let token = scan::agent_token(context.rest)?;

    // At most one agent per message, and it must come first: everything
    // before the candidate is blank text and raw whitespace.
    if context.emitted.iter().any(is_agent) {
        return None;
    }
    if !context.emitted.iter().all(Segment::is_blank_text) {
        return None;
    }
    if !context.preceded_by_whitespace_only() {
        return None;
    }

    let handle = directory.agent_named(&token.name)?;
    let (offsets, range) = context.ranges(token.span);
    let segment = AgentSegment::new(offsets, range, handle.data().clone());
    Some(AgentMatch { segment, handle })
}

/// Matches `#name` or `#name:digits` when the registry knows the name.
pub(super) fn match_variable(
    context: &MatchContext<'_>,
    registry: &dyn VariableRegistry,
) -> Option<VariableSegment> {
    let token = scan::variable_token(context.rest)?;
    if !registry.has_variable(&token.name) {
        return None;
    }
    let (offsets, range) = context.ranges(token.span);
    Some(VariableSegment::new(
        offsets,
        range,
        token.name,
        token.argument,
    ))
}

/// Matches `#name:argument` against the session snapshot.
///
/// The parser never invents references: a candidate resolves only when a
/// pre-registered record's anchor equals the candidate's start position.
/// The first such record wins.
pub(super) fn match_dynamic_reference(
    context: &MatchContext<'_>,
    snapshot: &[DynamicReference],
) -> Option<DynamicReferenceSegment> {
    let token = scan::reference_token(context.rest)?;
    let record = snapshot
        .iter()
        .find(|reference| reference.range().start == context.position)?;
    let (offsets, range) = context.ranges(token.span);
    Some(DynamicReferenceSegment::new(
        offsets,
        range,
        token.name,
        token.argument,
        record.data().clone(),
    ))
}

/// Matches `/name` as an agent sub-command or a standalone command.
///
/// When the message already carries an agent the candidate must directly
/// follow the mention and resolve against the agent's own sub-command
/// listing; the standalone registry is not consulted. An enumeration
/// failure declines the match.
pub(super) async fn match_command(
    context: &MatchContext<'_>,
    registry: &dyn CommandRegistry,
    agent: Option<&dyn ChatAgent>,
) -> Option<Segment> {
    let token = scan::command_token(context.rest)?;

    // At most one command per message, standalone or sub-command.
    if context.emitted.iter().any(is_command) {
        return None;
    }

    if let Some(mentioned) = agent {
        return match_sub_command(context, mentioned, &token)
            .await
            .map(Segment::AgentSubcommand);
    }

    let command = registry
        .commands()
        .into_iter()
        .find(|candidate| candidate.command == token.name)?;
    let (offsets, range) = context.ranges(token.span);
    Some(Segment::SlashCommand(SlashCommandSegment::new(
        offsets, range, command,
    )))
}

async fn match_sub_command(
    context: &MatchContext<'_>,
    agent: &dyn ChatAgent,
    token: &scan::CommandToken,
) -> Option<AgentSubcommandSegment> {
    if !directly_follows_agent(context) {
        return None;
    }
    let listing = agent.sub_commands().await.ok()?;
    let sub_command = listing
        .into_iter()
        .find(|candidate| candidate.name == token.name)?;
    let (offsets, range) = context.ranges(token.span);
    Some(AgentSubcommandSegment::new(offsets, range, sub_command))
}

/// Returns `true` when every segment after the agent mention is blank text
/// and only whitespace separates the last segment from the candidate.
fn directly_follows_agent(context: &MatchContext<'_>) -> bool {
    let Some(agent_index) = context.emitted.iter().position(is_agent) else {
        return false;
    };
    let after_agent = context
        .emitted
        .get(agent_index.saturating_add(1)..)
        .unwrap_or_default();
    after_agent.iter().all(Segment::is_blank_text) && context.preceded_by_whitespace_only()
}

const fn is_agent(segment: &Segment) -> bool {
    matches!(segment, Segment::Agent(_))
}

const fn is_command(segment: &Segment) -> bool {
    matches!(
        segment,
        Segment::SlashCommand(_) | Segment::AgentSubcommand(_)
    )
}
