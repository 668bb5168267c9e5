//! Property tests for ageguard.
//!
//! Properties use randomized input generation to protect the person
//! invariants: ages never go negative, rejections never mutate, aging is
//! exact.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/person.rs"]
mod person;

#[path = "properties/policy.rs"]
mod policy;
