//! Aalto: chat request tokenization for AI assistant frontends.
//!
//! This crate converts a raw chat message string plus session-scoped context
//! into an ordered sequence of typed segments: plain text, agent mentions,
//! agent sub-commands, standalone slash commands, variable references, and
//! position-anchored dynamic references. Consumers use the result for syntax
//! highlighting, request routing, and context resolution.
//!
//! # Architecture
//!
//! Aalto follows hexagonal architecture principles:
//!
//! - **Domain**: Pure parsing types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for session lookup services
//! - **Adapters**: Concrete implementations of ports (in-memory registries)
//!
//! # Modules
//!
//! - [`chat_request`]: Message segmentation and the request parser

pub mod chat_request;
