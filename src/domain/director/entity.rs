use std::fmt;

use crate::domain::{Person, PersonId, PersonKind, PersonSlots, Validation};
use crate::registry::Registries;

/// Directors carry no attributes beyond their identity
pub type DirectorSlots = PersonSlots;

/// A person who directs movies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Director {
    person: Person,
}

impl Director {
    pub fn new(slots: DirectorSlots, registries: &Registries) -> Validation<Self> {
        let person = Person::with_kind(slots, PersonKind::Director, registries)?;
        Ok(Self { person })
    }

    pub fn id(&self) -> PersonId {
        self.person.id()
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn set_name(&mut self, name: &str) -> Validation {
        self.person.set_name(name)
    }
}

impl fmt::Display for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Director{{ person ID: {}, name: {}}}", self.id(), self.name())
    }
}
