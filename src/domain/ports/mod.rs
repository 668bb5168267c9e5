//! Domain Ports
//!
//! Interfaces the domain exposes to the outside world.
//! Implementations live in `infrastructure`.

mod person_events;

pub use person_events::{NoopEventSink, PersonEvent, PersonEventSink};
