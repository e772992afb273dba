//! Adapter implementations for the chat request ports.
//!
//! Adapters connect the parser's lookup ports to concrete infrastructure
//! while the parsing core stays pure. The in-memory adapters back embedded
//! frontends and tests.

pub mod memory;
