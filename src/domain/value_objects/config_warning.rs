//! Configuration warning value object.

use std::path::PathBuf;

/// What went wrong with a config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarningKind {
    /// Key is not recognized and was ignored
    UnknownKey,
    /// Key is required by another setting but absent
    MissingValue,
}

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Produced while loading config (unknown keys) and while resolving the
/// effective policy (a `minimum_age` rule with no minimum anywhere).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub kind: ConfigWarningKind,
    /// The unknown or problematic key
    pub key: String,
    /// The file where the warning occurred; `None` for environment settings
    pub file: Option<PathBuf>,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = match (&self.file, self.line) {
            (Some(file), Some(line)) => format!(" in {}:{}", file.display(), line),
            (Some(file), None) => format!(" in {}", file.display()),
            (None, _) => " in environment".to_string(),
        };
        match self.kind {
            ConfigWarningKind::UnknownKey => {
                write!(f, "unknown config key '{}'{}", self.key, location)?;
            }
            ConfigWarningKind::MissingValue => {
                write!(f, "missing config key '{}'{}", self.key, location)?;
            }
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
