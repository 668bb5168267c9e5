//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod age;
mod config_warning;
mod person_name;

pub use age::Age;
pub use config_warning::{ConfigWarning, ConfigWarningKind};
pub use person_name::PersonName;
