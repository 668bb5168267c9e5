//! Event Sink Implementations
//!
//! Provides concrete implementations of PersonEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable lines

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
