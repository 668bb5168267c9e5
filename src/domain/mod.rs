//! Domain Layer
//!
//! The core of ageguard - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - `Person`
//! - `value_objects/` - Immutable value types (Age, PersonName, ConfigWarning)
//! - `policies/` - Business rules (AgeChangePolicy)
//! - `ports/` - Interface definitions for infrastructure (PersonEventSink)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or terminal directly
//! 2. **Pure Functions** - Policies are stateless and testable
//! 3. **Ports & Adapters** - Observability goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
