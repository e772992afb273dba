//! Segment types produced by the chat request parser.
//!
//! A parsed message is a sequence of typed segments covering the whole
//! input. Gap and trailing spans are synthesised as [`TextSegment`]s so
//! the sequence concatenates back to the original message.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AgentSubCommand, ChatAgentData, OffsetRange, SlashCommandData, TextRange};

/// A single segment of a parsed chat message.
///
/// Every segment carries the byte range and the editor range it covers.
///
/// # Serialisation
///
/// Segments are serialised with a `type` tag field:
///
/// ```json
/// { "type": "text", "offsets": {...}, "range": {...}, "content": "hello" }
/// { "type": "variable", "offsets": {...}, "range": {...}, "name": "selection", "argument": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Plain text, including synthesised gap and trailing spans.
    Text(TextSegment),
    /// A resolved agent mention.
    Agent(AgentSegment),
    /// A resolved sub-command of the message's agent.
    AgentSubcommand(AgentSubcommandSegment),
    /// A resolved standalone slash command.
    SlashCommand(SlashCommandSegment),
    /// A resolved variable reference.
    Variable(VariableSegment),
    /// A resolved position-anchored dynamic reference.
    DynamicReference(DynamicReferenceSegment),
}

impl Segment {
    /// Returns the byte range the segment covers.
    #[must_use]
    pub const fn offset_range(&self) -> OffsetRange {
        match self {
            Self::Text(segment) => segment.offsets,
            Self::Agent(segment) => segment.offsets,
            Self::AgentSubcommand(segment) => segment.offsets,
            Self::SlashCommand(segment) => segment.offsets,
            Self::Variable(segment) => segment.offsets,
            Self::DynamicReference(segment) => segment.offsets,
        }
    }

    /// Returns the editor range the segment covers.
    #[must_use]
    pub const fn editor_range(&self) -> TextRange {
        match self {
            Self::Text(segment) => segment.range,
            Self::Agent(segment) => segment.range,
            Self::AgentSubcommand(segment) => segment.range,
            Self::SlashCommand(segment) => segment.range,
            Self::Variable(segment) => segment.range,
            Self::DynamicReference(segment) => segment.range,
        }
    }

    /// Returns `true` for a text segment whose content is empty or
    /// whitespace-only.
    #[must_use]
    pub fn is_blank_text(&self) -> bool {
        match self {
            Self::Text(segment) => segment.is_blank(),
            _ => false,
        }
    }
}

/// Plain text covering part of the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    /// Byte range covered.
    pub offsets: OffsetRange,
    /// Editor range covered.
    pub range: TextRange,
    /// The raw substring of the message.
    pub content: String,
}

impl TextSegment {
    /// Creates a text segment.
    #[must_use]
    pub fn new(offsets: OffsetRange, range: TextRange, content: impl Into<String>) -> Self {
        Self {
            offsets,
            range,
            content: content.into(),
        }
    }

    /// Returns `true` if the content is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// A resolved agent mention (`!name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSegment {
    /// Byte range covered, leader included.
    pub offsets: OffsetRange,
    /// Editor range covered.
    pub range: TextRange,
    /// Identity of the resolved agent.
    pub agent: ChatAgentData,
}

impl AgentSegment {
    /// Creates an agent segment.
    #[must_use]
    pub const fn new(offsets: OffsetRange, range: TextRange, agent: ChatAgentData) -> Self {
        Self {
            offsets,
            range,
            agent,
        }
    }
}

/// A resolved sub-command of the message's agent (`/name` after `!agent`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSubcommandSegment {
    /// Byte range covered, leader included.
    pub offsets: OffsetRange,
    /// Editor range covered.
    pub range: TextRange,
    /// The resolved sub-command.
    pub sub_command: AgentSubCommand,
}

impl AgentSubcommandSegment {
    /// Creates an agent sub-command segment.
    #[must_use]
    pub const fn new(offsets: OffsetRange, range: TextRange, sub_command: AgentSubCommand) -> Self {
        Self {
            offsets,
            range,
            sub_command,
        }
    }
}

/// A resolved standalone slash command (`/name` without an agent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashCommandSegment {
    /// Byte range covered, leader included.
    pub offsets: OffsetRange,
    /// Editor range covered.
    pub range: TextRange,
    /// The resolved command entry.
    pub command: SlashCommandData,
}

impl SlashCommandSegment {
    /// Creates a slash-command segment.
    #[must_use]
    pub const fn new(offsets: OffsetRange, range: TextRange, command: SlashCommandData) -> Self {
        Self {
            offsets,
            range,
            command,
        }
    }
}

/// A resolved variable reference (`#name` or `#name:3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSegment {
    /// Byte range covered, leader included.
    pub offsets: OffsetRange,
    /// Editor range covered.
    pub range: TextRange,
    /// The variable name as written, without the leader.
    pub name: String,
    /// The numeric argument, when one was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<u64>,
}

impl VariableSegment {
    /// Creates a variable segment.
    #[must_use]
    pub fn new(
        offsets: OffsetRange,
        range: TextRange,
        name: impl Into<String>,
        argument: Option<u64>,
    ) -> Self {
        Self {
            offsets,
            range,
            name: name.into(),
            argument,
        }
    }
}

/// A resolved dynamic reference (`#name:argument` anchored by the session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicReferenceSegment {
    /// Byte range covered, leader included.
    pub offsets: OffsetRange,
    /// Editor range covered.
    pub range: TextRange,
    /// The reference name as written, without the leader.
    pub name: String,
    /// The argument following the colon (e.g. `foo.ts`).
    pub argument: String,
    /// The payload registered with the matching reference.
    pub data: Value,
}

impl DynamicReferenceSegment {
    /// Creates a dynamic-reference segment.
    #[must_use]
    pub fn new(
        offsets: OffsetRange,
        range: TextRange,
        name: impl Into<String>,
        argument: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            offsets,
            range,
            name: name.into(),
            argument: argument.into(),
            data,
        }
    }
}
