//! Error types for ageguard
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::policies::AgeChangeViolation;

/// Result type alias for ageguard operations
pub type AgeGuardResult<T> = Result<T, AgeGuardError>;

/// Main error type for ageguard operations
#[derive(Error, Debug)]
pub enum AgeGuardError {
    /// Person constructed with a negative initial age
    #[error("invalid age {age}: age must be zero or greater")]
    InvalidAge { age: i64 },

    /// Person constructed with an empty or blank name
    #[error("invalid name: name must not be empty")]
    InvalidName,

    /// Legal age change rejected by the person's policy
    #[error("illegal age change from {current} to {requested}: {violation}")]
    IllegalAgeChange {
        requested: i64,
        current: u64,
        violation: AgeChangeViolation,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl AgeGuardError {
    /// True for the two domain rejections (as opposed to environment failures).
    pub fn is_domain_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidAge { .. } | Self::InvalidName | Self::IllegalAgeChange { .. }
        )
    }
}
