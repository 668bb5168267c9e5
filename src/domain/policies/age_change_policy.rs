//! Age Change Policy
//!
//! The legality rule consulted by `Person::change_age_legally`.
//! No legal-age threshold is built in; `MinimumAge` must be given one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::Age;

/// Rule selector as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PolicyRule {
    #[default]
    NonNegative,
    NonDecreasing,
    MinimumAge,
}

impl std::str::FromStr for PolicyRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "non_negative" => Ok(Self::NonNegative),
            "non_decreasing" => Ok(Self::NonDecreasing),
            "minimum_age" => Ok(Self::MinimumAge),
            other => Err(format!(
                "unknown policy '{other}' (expected non_negative, non_decreasing or minimum_age)"
            )),
        }
    }
}

/// Legality rule for arbitrary age changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeChangePolicy {
    /// Any non-negative age is legal
    #[default]
    NonNegative,
    /// Age may stay the same or grow, never shrink
    NonDecreasing,
    /// Age must be at least `minimum`
    MinimumAge { minimum: Age },
}

/// The rule a rejected change broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgeChangeViolation {
    #[error("age must not be negative")]
    Negative,
    #[error("age must not decrease below {current}")]
    Decrease { current: Age },
    #[error("age must be at least {minimum}")]
    BelowMinimum { minimum: Age },
}

impl AgeChangePolicy {
    /// Build a policy from its config form.
    ///
    /// Returns `None` for `MinimumAge` without a minimum.
    pub fn from_rule(rule: PolicyRule, minimum: Option<u64>) -> Option<Self> {
        match rule {
            PolicyRule::NonNegative => Some(Self::NonNegative),
            PolicyRule::NonDecreasing => Some(Self::NonDecreasing),
            PolicyRule::MinimumAge => minimum.map(|m| Self::MinimumAge {
                minimum: Age::new(m),
            }),
        }
    }

    /// The config selector for this policy
    pub fn rule(&self) -> PolicyRule {
        match self {
            Self::NonNegative => PolicyRule::NonNegative,
            Self::NonDecreasing => PolicyRule::NonDecreasing,
            Self::MinimumAge { .. } => PolicyRule::MinimumAge,
        }
    }

    /// Decide whether `current` may become `requested`.
    ///
    /// Negativity is checked first. Requesting the current age is always legal.
    pub fn check(&self, current: Age, requested: i64) -> Result<Age, AgeChangeViolation> {
        let Some(requested) = Age::from_signed(requested) else {
            return Err(AgeChangeViolation::Negative);
        };
        if requested == current {
            return Ok(requested);
        }

        match self {
            Self::NonNegative => Ok(requested),
            Self::NonDecreasing if requested < current => {
                Err(AgeChangeViolation::Decrease { current })
            }
            Self::NonDecreasing => Ok(requested),
            Self::MinimumAge { minimum } if requested < *minimum => {
                Err(AgeChangeViolation::BelowMinimum { minimum: *minimum })
            }
            Self::MinimumAge { .. } => Ok(requested),
        }
    }
}

impl std::fmt::Display for AgeChangePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonNegative => write!(f, "non_negative"),
            Self::NonDecreasing => write!(f, "non_decreasing"),
            Self::MinimumAge { minimum } => write!(f, "minimum_age({})", minimum),
        }
    }
}
