//! ageguard - guarded mutable-age persons
//!
//! A `Person` has a fixed name and an age that changes only two ways:
//! unconditionally by one year (`aging`), or to an arbitrary value that a
//! configurable `AgeChangePolicy` must accept (`change_age_legally`).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::PersonService;
pub use config::{Config, OutputFormat, Verbosity};
pub use domain::entities::Person;
pub use domain::policies::{AgeChangePolicy, AgeChangeViolation, PolicyRule};
pub use domain::ports::{NoopEventSink, PersonEvent, PersonEventSink};
pub use domain::value_objects::{Age, PersonName};
pub use error::{AgeGuardError, AgeGuardResult};
