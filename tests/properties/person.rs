//! Property tests for the Person entity.

use proptest::prelude::*;

use ageguard::{Age, AgeChangePolicy, AgeGuardError, Person};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Valid construction stores the initial age verbatim.
    #[test]
    fn property_construction_keeps_initial_age(initial in 0i64..=i64::MAX) {
        let person = Person::new("John Doe", initial).unwrap();
        prop_assert_eq!(person.current_age().years(), initial as u64);
    }

    /// PROPERTY: Negative initial ages always fail with InvalidAge.
    #[test]
    fn property_negative_construction_fails(initial in i64::MIN..0i64) {
        let result = Person::new("X", initial);
        let rejected = matches!(result, Err(AgeGuardError::InvalidAge { age }) if age == initial);
        prop_assert!(rejected);
    }

    /// PROPERTY: Aging n times adds exactly n.
    #[test]
    fn property_aging_is_exact(initial in 0i64..1_000_000, steps in 0u64..512) {
        let mut person = Person::new("John Doe", initial).unwrap();
        for _ in 0..steps {
            person.aging();
        }
        prop_assert_eq!(person.current_age().years(), initial as u64 + steps);
    }

    /// PROPERTY: Under the default policy any non-negative target is applied.
    #[test]
    fn property_non_negative_change_applies(initial in 0i64..10_000, target in 0i64..10_000) {
        let mut person = Person::new("Hey Jude", initial).unwrap();
        prop_assert!(person.change_age_legally(target).is_ok());
        prop_assert_eq!(person.current_age().years(), target as u64);
    }

    /// PROPERTY: Negative targets are rejected and leave the age unchanged.
    #[test]
    fn property_negative_change_rejected(initial in 0i64..10_000, target in i64::MIN..0i64) {
        let mut person = Person::new("Ten", initial).unwrap();
        let result = person.change_age_legally(target);
        let is_illegal = matches!(result, Err(AgeGuardError::IllegalAgeChange { .. }));
        prop_assert!(is_illegal);
        prop_assert_eq!(person.current_age().years(), initial as u64);
    }

    /// PROPERTY: Changing to the current age is a successful no-op under every policy.
    #[test]
    fn property_change_to_current_is_noop(
        initial in 0i64..200,
        minimum in 0u64..200,
        which in 0usize..3,
    ) {
        let policy = match which {
            0 => AgeChangePolicy::NonNegative,
            1 => AgeChangePolicy::NonDecreasing,
            _ => AgeChangePolicy::MinimumAge { minimum: Age::new(minimum) },
        };
        let mut person = Person::with_policy("Same", initial, policy).unwrap();
        prop_assert!(person.change_age_legally(initial).is_ok());
        prop_assert_eq!(person.current_age().years(), initial as u64);
    }
}
