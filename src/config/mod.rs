//! Configuration module for ageguard
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AGEGUARD_*)
//! 3. Project config (./ageguard.toml)
//! 4. User config (<config dir>/ageguard/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::{ConfigWarning, ConfigWarningKind};

pub use loader::{discover_config_path, missing_minimum_warning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, OutputFormat, PolicyConfig, Verbosity};
