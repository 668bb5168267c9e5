//! Person entity - a named entity with a guarded, mutable age
//!
//! Two mutation paths exist and they are deliberately unrelated:
//! - `aging()` adds one year, unconditionally.
//! - `change_age_legally()` sets an arbitrary age after consulting the
//!   person's `AgeChangePolicy`.
//!
//! The name is fixed at construction.

use crate::domain::policies::AgeChangePolicy;
use crate::domain::value_objects::{Age, PersonName};
use crate::error::{AgeGuardError, AgeGuardResult};

/// A person whose age can only change through `aging` or `change_age_legally`
#[derive(Debug, PartialEq, Eq)]
pub struct Person {
    name: PersonName,
    age: Age,
    policy: AgeChangePolicy,
}

impl Person {
    /// Create a person governed by the default (non-negative) policy
    pub fn new(name: impl Into<String>, initial_age: i64) -> AgeGuardResult<Self> {
        Self::with_policy(name, initial_age, AgeChangePolicy::default())
    }

    /// Create a person governed by `policy`
    ///
    /// The policy only applies to later legal changes; the initial age just
    /// has to be non-negative.
    pub fn with_policy(
        name: impl Into<String>,
        initial_age: i64,
        policy: AgeChangePolicy,
    ) -> AgeGuardResult<Self> {
        let age = Age::from_signed(initial_age)
            .ok_or(AgeGuardError::InvalidAge { age: initial_age })?;
        let name = PersonName::parse(name)?;
        Ok(Self { name, age, policy })
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn current_age(&self) -> Age {
        self.age
    }

    pub fn policy(&self) -> AgeChangePolicy {
        self.policy
    }

    /// Grow one year older. Never fails and checks nothing.
    pub fn aging(&mut self) {
        self.age = self.age.next_year();
    }

    /// Set the age to `new_age` if the policy allows it.
    ///
    /// On rejection the person is left untouched.
    pub fn change_age_legally(&mut self, new_age: i64) -> AgeGuardResult<()> {
        let accepted = self.policy.check(self.age, new_age).map_err(|violation| {
            AgeGuardError::IllegalAgeChange {
                requested: new_age,
                current: self.age.years(),
                violation,
            }
        })?;
        self.age = accepted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policies::AgeChangeViolation;

    // === Construction ===

    #[test]
    fn new_stores_name_and_age() {
        let person = Person::new("John Doe", 42).unwrap();

        assert_eq!(person.name().as_str(), "John Doe");
        assert_eq!(person.current_age(), Age::new(42));
        assert_eq!(person.policy(), AgeChangePolicy::NonNegative);
    }

    #[test]
    fn new_accepts_zero() {
        let person = Person::new("Newborn", 0).unwrap();
        assert_eq!(person.current_age(), Age::new(0));
    }

    #[test]
    fn new_rejects_negative_age() {
        let err = Person::new("X", -1).unwrap_err();
        assert!(matches!(err, AgeGuardError::InvalidAge { age: -1 }));
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Person::new("  ", 30).unwrap_err();
        assert!(matches!(err, AgeGuardError::InvalidName));
    }

    // === aging ===

    #[test]
    fn aging_adds_one_year() {
        let mut person = Person::new("John Doe", 42).unwrap();

        person.aging();

        assert_eq!(person.current_age(), Age::new(43));
    }

    #[test]
    fn aging_ignores_policy() {
        // NonDecreasing or a minimum never blocks the unconditional path.
        let mut person =
            Person::with_policy("Kid", 3, AgeChangePolicy::MinimumAge { minimum: Age::new(18) })
                .unwrap();

        person.aging();

        assert_eq!(person.current_age(), Age::new(4));
    }

    #[test]
    fn aging_n_times_adds_n() {
        let mut person = Person::new("Jane", 0).unwrap();
        for _ in 0..250 {
            person.aging();
        }
        assert_eq!(person.current_age(), Age::new(250));
    }

    // === change_age_legally ===

    #[test]
    fn change_age_legally_sets_new_age() {
        let mut person = Person::new("Hey Jude", 48).unwrap();

        person.change_age_legally(42).unwrap();

        assert_eq!(person.current_age(), Age::new(42));
    }

    #[test]
    fn change_age_legally_rejects_negative_and_keeps_state() {
        let mut person = Person::new("Ten", 10).unwrap();

        let err = person.change_age_legally(-5).unwrap_err();

        assert!(matches!(
            err,
            AgeGuardError::IllegalAgeChange {
                requested: -5,
                current: 10,
                violation: AgeChangeViolation::Negative,
            }
        ));
        assert_eq!(person.current_age(), Age::new(10));
    }

    #[test]
    fn change_age_legally_to_current_is_noop() {
        let mut person = Person::new("Same", 33).unwrap();

        person.change_age_legally(33).unwrap();

        assert_eq!(person.current_age(), Age::new(33));
    }

    #[test]
    fn change_age_legally_uses_configured_policy() {
        let mut person =
            Person::with_policy("Hey Jude", 48, AgeChangePolicy::NonDecreasing).unwrap();

        let err = person.change_age_legally(42).unwrap_err();

        assert!(matches!(
            err,
            AgeGuardError::IllegalAgeChange {
                violation: AgeChangeViolation::Decrease { .. },
                ..
            }
        ));
        assert_eq!(person.current_age(), Age::new(48));

        person.change_age_legally(50).unwrap();
        assert_eq!(person.current_age(), Age::new(50));
    }

    #[test]
    fn name_survives_every_mutation() {
        let mut person = Person::new("John Doe", 42).unwrap();

        person.aging();
        person.change_age_legally(7).unwrap();
        let _ = person.change_age_legally(-1);

        assert_eq!(person.name().as_str(), "John Doe");
    }
}
