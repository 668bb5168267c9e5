//! Person Service
//!
//! Runs the `Person` operations and reports each outcome to an event sink.

use std::sync::Arc;

use crate::domain::entities::Person;
use crate::domain::policies::AgeChangePolicy;
use crate::domain::ports::{PersonEvent, PersonEventSink};
use crate::error::{AgeGuardError, AgeGuardResult};

/// Person use case - the observable front door to `Person`
pub struct PersonService {
    policy: AgeChangePolicy,
    event_sink: Arc<dyn PersonEventSink>,
}

impl PersonService {
    /// Create a service that stamps `policy` on every person it creates
    pub fn new(policy: AgeChangePolicy, event_sink: Arc<dyn PersonEventSink>) -> Self {
        Self { policy, event_sink }
    }

    pub fn policy(&self) -> AgeChangePolicy {
        self.policy
    }

    /// Construct a person under the service's policy
    pub fn create(&self, name: &str, initial_age: i64) -> AgeGuardResult<Person> {
        match Person::with_policy(name, initial_age, self.policy) {
            Ok(person) => {
                self.event_sink.on_event(PersonEvent::Created {
                    name: person.name().to_string(),
                    age: person.current_age().years(),
                    policy: person.policy(),
                });
                Ok(person)
            }
            Err(err) => {
                self.event_sink.on_event(PersonEvent::CreateRejected {
                    name: name.to_string(),
                    age: initial_age,
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Age `person` by one year
    pub fn age(&self, person: &mut Person) {
        let from = person.current_age().years();
        person.aging();
        if self.event_sink.wants_detailed_events() {
            self.event_sink.on_event(PersonEvent::Aged {
                name: person.name().to_string(),
                from,
                to: person.current_age().years(),
            });
        }
    }

    /// Age `person` by `years` single steps
    pub fn age_by(&self, person: &mut Person, years: u64) {
        for _ in 0..years {
            self.age(person);
        }
    }

    /// Legally change the age of `person`, reporting acceptance or rejection
    pub fn change_age_legally(&self, person: &mut Person, new_age: i64) -> AgeGuardResult<()> {
        let from = person.current_age().years();
        match person.change_age_legally(new_age) {
            Ok(()) => {
                self.event_sink.on_event(PersonEvent::AgeChanged {
                    name: person.name().to_string(),
                    from,
                    to: person.current_age().years(),
                });
                Ok(())
            }
            Err(err) => {
                if let AgeGuardError::IllegalAgeChange { violation, .. } = &err {
                    self.event_sink.on_event(PersonEvent::AgeChangeRejected {
                        name: person.name().to_string(),
                        current: from,
                        requested: new_age,
                        reason: violation.to_string(),
                    });
                }
                Err(err)
            }
        }
    }
}
