//! Domain errors for chat request parsing.

use thiserror::Error;

use super::Position;

/// Errors raised while constructing chat-request domain values.
///
/// Parsing itself never fails; these errors guard registration-side
/// construction of names and references.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatRequestDomainError {
    /// An agent name was empty after trimming.
    #[error("agent name must not be empty")]
    EmptyAgentName,

    /// An agent name contained characters outside `[A-Za-z0-9_-]`.
    #[error("agent name contains invalid characters: {0}")]
    InvalidAgentName(String),

    /// An agent name exceeded the maximum length.
    #[error("agent name exceeds 100 characters: {0}")]
    AgentNameTooLong(String),

    /// A variable name was empty after trimming.
    #[error("variable name must not be empty")]
    EmptyVariableName,

    /// A variable name contained characters outside `[A-Za-z0-9_-]`.
    #[error("variable name contains invalid characters: {0}")]
    InvalidVariableName(String),

    /// A variable name exceeded the maximum length.
    #[error("variable name exceeds 100 characters: {0}")]
    VariableNameTooLong(String),

    /// A dynamic reference was registered with its end before its start.
    #[error("dynamic reference range ends before it starts: {start} to {end}")]
    UnorderedReferenceRange {
        /// Declared start position.
        start: Position,
        /// Declared end position.
        end: Position,
    },
}
