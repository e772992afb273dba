//! Application services for the chat request subsystem.
//!
//! The parser service drives the scan loop over a message and coordinates
//! the private matcher rules against the lookup ports.

mod matchers;
mod parser;

pub use parser::ChatRequestParser;
