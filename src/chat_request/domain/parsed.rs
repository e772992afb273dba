//! The parsed chat request aggregate.

use serde::{Deserialize, Serialize};

use super::{
    AgentSegment, AgentSubcommandSegment, DynamicReferenceSegment, Segment, SlashCommandSegment,
    VariableSegment,
};

/// An ordered, gap-free segmentation of a chat message.
///
/// Segments are sorted by ascending start offset, never overlap, and cover
/// the whole message: concatenating the covered substrings reproduces the
/// original text. An empty message has no segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedChatRequest {
    text: String,
    segments: Vec<Segment>,
}

impl ParsedChatRequest {
    /// Creates a parsed request from the original text and its segments.
    ///
    /// Debug builds assert the segmentation invariants: ascending,
    /// adjacent, and covering the whole text.
    #[must_use]
    pub fn new(text: impl Into<String>, segments: Vec<Segment>) -> Self {
        let request = Self {
            text: text.into(),
            segments,
        };
        debug_assert!(
            request.is_contiguous(),
            "segments must cover the message without gaps or overlap",
        );
        request
    }

    fn is_contiguous(&self) -> bool {
        let mut expected_start = 0;
        for segment in &self.segments {
            let offsets = segment.offset_range();
            if offsets.start != expected_start || offsets.end < offsets.start {
                return false;
            }
            expected_start = offsets.end;
        }
        expected_start == self.text.len()
    }

    /// Returns the original message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the segments in message order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the substring of the original text covered by `segment`.
    ///
    /// Returns an empty string for a segment whose range does not lie on
    /// character boundaries of this text, which cannot happen for segments
    /// produced together with it.
    #[must_use]
    pub fn segment_text(&self, segment: &Segment) -> &str {
        let offsets = segment.offset_range();
        self.text.get(offsets.start..offsets.end).unwrap_or_default()
    }

    /// Returns the agent mention, when the message has one.
    #[must_use]
    pub fn agent(&self) -> Option<&AgentSegment> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::Agent(agent) => Some(agent),
            _ => None,
        })
    }

    /// Returns the agent sub-command, when the message has one.
    #[must_use]
    pub fn sub_command(&self) -> Option<&AgentSubcommandSegment> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::AgentSubcommand(sub_command) => Some(sub_command),
            _ => None,
        })
    }

    /// Returns the standalone slash command, when the message has one.
    #[must_use]
    pub fn slash_command(&self) -> Option<&SlashCommandSegment> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::SlashCommand(command) => Some(command),
            _ => None,
        })
    }

    /// Returns the variable references in message order.
    #[must_use]
    pub fn variables(&self) -> Vec<&VariableSegment> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Variable(variable) => Some(variable),
                _ => None,
            })
            .collect()
    }

    /// Returns the dynamic references in message order.
    #[must_use]
    pub fn dynamic_references(&self) -> Vec<&DynamicReferenceSegment> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::DynamicReference(reference) => Some(reference),
                _ => None,
            })
            .collect()
    }
}
