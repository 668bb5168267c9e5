//! Person Event Port
//!
//! Provides an observable interface for person operations.
//! Enables JSON event streams, console progress and debugging.

use crate::domain::policies::AgeChangePolicy;

/// Event emitted by `PersonService`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonEvent {
    /// Person constructed
    Created {
        name: String,
        age: u64,
        policy: AgeChangePolicy,
    },

    /// Construction rejected
    CreateRejected { name: String, age: i64, error: String },

    /// Unconditional one-year increment
    Aged { name: String, from: u64, to: u64 },

    /// Legal age change applied
    AgeChanged { name: String, from: u64, to: u64 },

    /// Legal age change rejected; age unchanged
    AgeChangeRejected {
        name: String,
        current: u64,
        requested: i64,
        reason: String,
    },
}

impl PersonEvent {
    /// Whether this is a per-step event that summary-only sinks may drop
    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Aged { .. })
    }
}

/// Trait for receiving person events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable lines
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait PersonEventSink: Send + Sync {
    /// Handle a person event
    fn on_event(&self, event: PersonEvent);

    /// Check if this sink wants detailed events (every single aging step)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PersonEventSink for NoopEventSink {
    fn on_event(&self, _event: PersonEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
