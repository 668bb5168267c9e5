//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sinks (NDJSON, console)

pub mod events;

pub use events::{ConsoleEventSink, JsonEventSink};
