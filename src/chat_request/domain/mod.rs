//! Domain types for the chat request subsystem.
//!
//! This module contains pure parsing types with no infrastructure
//! dependencies. All types are immutable after construction and
//! serialisable via serde.

mod agent;
mod command;
mod error;
mod ids;
mod parsed;
mod position;
mod reference;
mod segment;
mod variable;

pub(crate) mod scan;

pub use agent::{AgentName, AgentSubCommand, ChatAgentData};
pub use command::SlashCommandData;
pub use error::ChatRequestDomainError;
pub use ids::SessionId;
pub use parsed::ParsedChatRequest;
pub use position::{OffsetRange, Position, TextRange};
pub use reference::DynamicReference;
pub use segment::{
    AgentSegment, AgentSubcommandSegment, DynamicReferenceSegment, Segment, SlashCommandSegment,
    TextSegment, VariableSegment,
};
pub use variable::VariableName;
