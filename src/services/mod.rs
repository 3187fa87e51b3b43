// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// One service per entity type. Services own the storage handle and the table
// key; the registries are passed in explicitly on every call.
//
// - add: construct through the checked constructor, insert on success
// - update: stage a clone, apply every change, publish only if all succeed
// - destroy: remove and clean up dependent movie references
// - retrieve_all / save_all: whole-table snapshots

pub mod actor_service;
pub mod director_service;
pub mod movie_service;
pub mod person_service;

pub use actor_service::{ActorService, UpdateActorRequest};
pub use director_service::{DirectorService, UpdateDirectorRequest};
pub use movie_service::{MovieService, UpdateMovieRequest};
pub use person_service::{PersonService, UpdatePersonRequest};

use crate::domain::{Actor, ConstraintViolation, Director, Person, PersonId, Validation};
use crate::error::AppError;
use crate::registry::Registries;

/// Log a rejected operation and turn the violation into an error
pub(crate) fn reject(label: &str, violation: ConstraintViolation) -> AppError {
    log::warn!("[{}] {}: {}", label, violation.kind(), violation);
    AppError::Constraint(violation)
}

/// Log the outcome of a successful update
pub(crate) fn log_update(changed: &[&str], subject: &str) {
    match changed.len() {
        0 => log::debug!("No property value changed for {}!", subject),
        1 => log::info!("Property {} modified for {}", changed[0], subject),
        _ => log::info!("Properties {} modified for {}", changed.join(","), subject),
    }
}

/// Every record registered under one person identifier, staged so that a
/// rename reaches all of them or none
pub(crate) struct IdentityRoles {
    person: Option<Person>,
    actor: Option<Actor>,
    director: Option<Director>,
}

impl IdentityRoles {
    pub(crate) fn stage(registries: &Registries, id: PersonId) -> Self {
        Self {
            person: registries.people.get(&id).cloned(),
            actor: registries.actors.get(&id).cloned(),
            director: registries.directors.get(&id).cloned(),
        }
    }

    pub(crate) fn rename(&mut self, name: &str) -> Validation {
        if let Some(person) = self.person.as_mut() {
            person.set_name(name)?;
        }
        if let Some(actor) = self.actor.as_mut() {
            actor.set_name(name)?;
        }
        if let Some(director) = self.director.as_mut() {
            director.set_name(name)?;
        }
        Ok(())
    }

    pub(crate) fn publish(self, registries: &mut Registries) {
        if let Some(person) = self.person {
            registries.people.insert(person);
        }
        if let Some(actor) = self.actor {
            registries.actors.insert(actor);
        }
        if let Some(director) = self.director {
            registries.directors.insert(director);
        }
    }
}
