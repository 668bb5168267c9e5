//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Person` - a named entity with a guarded, mutable age

mod person;

pub use person::Person;
