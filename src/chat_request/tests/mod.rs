//! Unit tests for the chat request subsystem.
