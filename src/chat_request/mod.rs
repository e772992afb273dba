//! Chat request segmentation for Aalto.
//!
//! This module implements the request tokenizer: a single left-to-right scan
//! that turns a raw message string plus session-scoped context into an
//! ordered, gap-free sequence of typed segments.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure parsing types ([`domain::Segment`], [`domain::Position`], [`domain::ParsedChatRequest`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::agents::AgentDirectory`], [`ports::references::DynamicReferenceSource`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryAgentDirectory`], [`adapters::memory::InMemoryReferenceStore`])
//! - **Services**: The [`services::ChatRequestParser`] scan loop and its matcher rules
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use aalto::chat_request::adapters::memory::{
//!     InMemoryAgentDirectory, InMemoryChatAgent, InMemoryCommandRegistry,
//!     InMemoryReferenceStore, InMemoryVariableRegistry,
//! };
//! use aalto::chat_request::domain::{AgentName, ChatAgentData, SessionId};
//! use aalto::chat_request::services::ChatRequestParser;
//!
//! let name = AgentName::new("reviewer").expect("valid agent name");
//! let agent = InMemoryChatAgent::new(ChatAgentData::new(name, "Reviews changes"));
//! let directory = InMemoryAgentDirectory::with_agents([agent]).expect("unique agent names");
//!
//! let parser = ChatRequestParser::new(
//!     Arc::new(directory),
//!     Arc::new(InMemoryVariableRegistry::new()),
//!     Arc::new(InMemoryCommandRegistry::new()),
//!     Arc::new(InMemoryReferenceStore::new()),
//! );
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .build()
//!     .expect("runtime should build");
//! let parsed = runtime.block_on(parser.parse(SessionId::new(), "!reviewer check this"));
//!
//! assert!(parsed.agent().is_some());
//! assert_eq!(parsed.segments().len(), 2);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
