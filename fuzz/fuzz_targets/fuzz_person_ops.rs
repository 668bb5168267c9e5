#![no_main]

use ageguard::{Age, AgeChangePolicy, Person};
use libfuzzer_sys::fuzz_target;

// Byte stream: [policy selector, minimum, initial age, then 9-byte ops]
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let policy = match data[0] % 3 {
        0 => AgeChangePolicy::NonNegative,
        1 => AgeChangePolicy::NonDecreasing,
        _ => AgeChangePolicy::MinimumAge {
            minimum: Age::new(u64::from(data[1])),
        },
    };
    let Ok(mut person) = Person::with_policy("fuzz", i64::from(data[2]), policy) else {
        return;
    };

    for chunk in data[3..].chunks_exact(9) {
        let before = person.current_age();
        if chunk[0] % 2 == 0 {
            person.aging();
            assert_eq!(person.current_age(), before.next_year());
        } else {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(&chunk[1..]);
            let target = i64::from_le_bytes(raw);
            if person.change_age_legally(target).is_err() {
                assert_eq!(person.current_age(), before);
            }
        }
    }
});
