//! Property tests for age change policies.

use proptest::prelude::*;

use ageguard::{Age, AgeChangePolicy, AgeChangeViolation, Person};

fn any_policy() -> impl Strategy<Value = AgeChangePolicy> {
    prop_oneof![
        Just(AgeChangePolicy::NonNegative),
        Just(AgeChangePolicy::NonDecreasing),
        (0u64..150).prop_map(|m| AgeChangePolicy::MinimumAge {
            minimum: Age::new(m)
        }),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Aging,
    Change(i64),
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Aging), (-200i64..200).prop_map(Op::Change)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `check` either accepts exactly the requested value or names why not.
    #[test]
    fn property_check_accepts_requested_value(
        policy in any_policy(),
        current in 0u64..150,
        requested in -150i64..150,
    ) {
        match policy.check(Age::new(current), requested) {
            Ok(age) => prop_assert_eq!(age.years() as i64, requested),
            Err(AgeChangeViolation::Negative) => prop_assert!(requested < 0),
            Err(AgeChangeViolation::Decrease { current: c }) => {
                prop_assert_eq!(policy, AgeChangePolicy::NonDecreasing);
                prop_assert!((requested as u64) < c.years());
            }
            Err(AgeChangeViolation::BelowMinimum { minimum }) => {
                prop_assert!((requested as u64) < minimum.years());
            }
        }
    }

    /// PROPERTY: Arbitrary operation sequences never panic, and every
    /// rejection leaves the age where it was.
    #[test]
    fn property_operation_sequences_keep_invariants(
        policy in any_policy(),
        initial in 0i64..150,
        ops in proptest::collection::vec(any_op(), 0..32),
    ) {
        let mut person = Person::with_policy("Fuzz", initial, policy).unwrap();
        for op in ops {
            let before = person.current_age();
            match op {
                Op::Aging => {
                    person.aging();
                    prop_assert_eq!(person.current_age(), before.next_year());
                }
                Op::Change(target) => {
                    if person.change_age_legally(target).is_err() {
                        prop_assert_eq!(person.current_age(), before);
                    } else {
                        prop_assert_eq!(person.current_age().years() as i64, target);
                    }
                }
            }
            prop_assert_eq!(person.name().as_str(), "Fuzz");
        }
    }
}
