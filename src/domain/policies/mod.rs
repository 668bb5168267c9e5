//! Domain Policies
//!
//! Business rules that govern behavior.
//! These are pure functions that operate on domain values.

mod age_change_policy;

pub use age_change_policy::{AgeChangePolicy, AgeChangeViolation, PolicyRule};
