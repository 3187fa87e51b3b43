use std::fmt;

use super::invariants::check_agent;
use crate::domain::{Person, PersonId, PersonKind, PersonSlots, Validation};
use crate::registry::Registries;

/// Proposed attribute values for an Actor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorSlots {
    pub person_id: Option<i64>,
    pub name: Option<String>,
    pub agent: Option<String>,
}

impl ActorSlots {
    pub fn new(person_id: i64, name: impl Into<String>) -> Self {
        Self {
            person_id: Some(person_id),
            name: Some(name.into()),
            agent: None,
        }
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }
}

/// A person who plays in movies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    person: Person,
    agent: Option<String>,
}

impl Actor {
    pub fn new(slots: ActorSlots, registries: &Registries) -> Validation<Self> {
        let person = Person::with_kind(
            PersonSlots {
                person_id: slots.person_id,
                name: slots.name,
            },
            PersonKind::Actor,
            registries,
        )?;
        check_agent(slots.agent.as_deref())?;
        Ok(Self {
            person,
            agent: slots.agent,
        })
    }

    pub fn id(&self) -> PersonId {
        self.person.id()
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn agent(&self) -> Option<&str> {
        self.agent.as_deref()
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn set_name(&mut self, name: &str) -> Validation {
        self.person.set_name(name)
    }

    /// `None` removes the agent
    pub fn set_agent(&mut self, agent: Option<&str>) -> Validation {
        check_agent(agent)?;
        self.agent = agent.map(str::to_string);
        Ok(())
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Actor{{ person ID: {}, name: {}", self.id(), self.name())?;
        if let Some(agent) = &self.agent {
            write!(f, ", agent: {}", agent)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViolationKind;

    #[test]
    fn test_actor_with_agent() {
        let registries = Registries::new();
        let actor = Actor::new(
            ActorSlots::new(4, "Uma Thurman").with_agent("John Doe"),
            &registries,
        )
        .unwrap();
        assert_eq!(actor.agent(), Some("John Doe"));
        assert_eq!(
            actor.to_string(),
            "Actor{ person ID: 4, name: Uma Thurman, agent: John Doe}"
        );
    }

    #[test]
    fn test_blank_agent_rejected() {
        let registries = Registries::new();
        let err = Actor::new(ActorSlots::new(4, "Uma Thurman").with_agent(" "), &registries)
            .unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Range);
    }

    #[test]
    fn test_set_agent_can_clear() {
        let registries = Registries::new();
        let mut actor = Actor::new(
            ActorSlots::new(8, "Keanu Reeves").with_agent("Jane Doe"),
            &registries,
        )
        .unwrap();
        actor.set_agent(None).unwrap();
        assert_eq!(actor.agent(), None);
        assert_eq!(actor.to_string(), "Actor{ person ID: 8, name: Keanu Reeves}");
    }
}
