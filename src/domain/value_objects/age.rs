//! Age value object - a non-negative number of years
//!
//! Negative ages are unrepresentable; conversion from a signed input is the
//! only fallible entry point.

use std::fmt;

/// Age in whole years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Age(u64);

impl Age {
    /// Create an age from an unsigned year count
    pub const fn new(years: u64) -> Self {
        Self(years)
    }

    /// Convert a signed year count, `None` when negative
    pub fn from_signed(years: i64) -> Option<Self> {
        u64::try_from(years).ok().map(Self)
    }

    /// Number of years
    pub fn years(self) -> u64 {
        self.0
    }

    /// The age one year later.
    ///
    /// Saturates at `u64::MAX` rather than wrapping.
    pub fn next_year(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for Age {
    fn from(years: u64) -> Self {
        Self(years)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
