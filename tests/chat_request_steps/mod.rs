//! Step definitions for chat request parsing BDD scenarios.

mod then;
mod when;
pub mod world;
