use std::fmt;

use serde::{Deserialize, Serialize};

use super::invariants::{check_name, check_name_matches_identity, check_person_id_as_id};
use crate::domain::{PersonId, Validation};
use crate::registry::Registries;

/// Closed set of concrete person types sharing one identifier space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonKind {
    Person,
    Actor,
    Director,
}

impl PersonKind {
    /// Subtypes of Person, in the order cascading load and delete visit them
    pub const SUBTYPES: [PersonKind; 2] = [PersonKind::Actor, PersonKind::Director];

    pub fn label(self) -> &'static str {
        match self {
            PersonKind::Person => "Person",
            PersonKind::Actor => "Actor",
            PersonKind::Director => "Director",
        }
    }

    /// Key of the persisted table holding this type's records
    pub fn table_key(self) -> &'static str {
        match self {
            PersonKind::Person => "people",
            PersonKind::Actor => "actors",
            PersonKind::Director => "directors",
        }
    }

    /// Whether records of this type carry an agent
    pub fn has_agent(self) -> bool {
        matches!(self, PersonKind::Actor)
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Proposed attribute values for a Person
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonSlots {
    pub person_id: Option<i64>,
    pub name: Option<String>,
}

impl PersonSlots {
    pub fn new(person_id: i64, name: impl Into<String>) -> Self {
        Self {
            person_id: Some(person_id),
            name: Some(name.into()),
        }
    }
}

/// Base identity of every person in the catalog.
///
/// Actor and Director embed a `Person` as their identity core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: String,
}

impl Person {
    /// Build a plain Person; the id must be free across the whole identity space
    pub fn new(slots: PersonSlots, registries: &Registries) -> Validation<Self> {
        Self::with_kind(slots, PersonKind::Person, registries)
    }

    /// Build the identity core for a concrete type, checking uniqueness
    /// against that type's own registry
    pub(crate) fn with_kind(
        slots: PersonSlots,
        kind: PersonKind,
        registries: &Registries,
    ) -> Validation<Self> {
        let id = check_person_id_as_id(slots.person_id, kind, registries)?;
        check_name(slots.name.as_deref())?;
        let name = slots.name.unwrap_or_default();
        check_name_matches_identity(id, &name, registries)?;
        Ok(Self { id, name })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> Validation {
        check_name(Some(name))?;
        self.name = name.to_string();
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person{{ person ID: {}, name: {}}}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViolationKind;

    #[test]
    fn test_valid_person() {
        let registries = Registries::new();
        let person = Person::new(PersonSlots::new(14, "John Forbes Nash"), &registries).unwrap();
        assert_eq!(person.id().get(), 14);
        assert_eq!(person.name(), "John Forbes Nash");
        assert_eq!(person.to_string(), "Person{ person ID: 14, name: John Forbes Nash}");
    }

    #[test]
    fn test_missing_name_fails() {
        let registries = Registries::new();
        let slots = PersonSlots {
            person_id: Some(1),
            name: None,
        };
        let err = Person::new(slots, &registries).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::MandatoryValue);
    }

    #[test]
    fn test_set_name_rejects_blank_and_keeps_old_value() {
        let registries = Registries::new();
        let mut person = Person::new(PersonSlots::new(15, "John Doe"), &registries).unwrap();
        let err = person.set_name("   ").unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Range);
        assert_eq!(person.name(), "John Doe");
    }

    #[test]
    fn test_kind_capabilities() {
        assert!(PersonKind::Actor.has_agent());
        assert!(!PersonKind::Director.has_agent());
        assert!(!PersonKind::Person.has_agent());
        assert_eq!(PersonKind::Director.table_key(), "directors");
        assert!(!PersonKind::SUBTYPES.contains(&PersonKind::Person));
    }
}
