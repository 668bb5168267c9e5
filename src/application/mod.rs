//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Reports what happened through `PersonEventSink`
//!
//! ## Use Cases
//!
//! - `PersonService` - create persons, age them, change their age legally

mod person_service;

pub use person_service::PersonService;
