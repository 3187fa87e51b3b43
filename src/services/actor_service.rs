// src/services/actor_service.rs

use std::sync::Arc;

use crate::domain::{Actor, ActorSlots, PersonId, PersonKind, Validation};
use crate::error::{AppError, AppResult};
use crate::registry::Registries;
use crate::repositories::{decode_records, load_table, save_table, ActorRecord, KeyValueStore, Table};

use super::{log_update, reject, IdentityRoles};

const KIND: PersonKind = PersonKind::Actor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateActorRequest {
    pub person_id: PersonId,
    pub name: Option<String>,
    /// `Some(None)` removes the agent
    pub agent: Option<Option<String>>,
}

pub struct ActorService {
    store: Arc<dyn KeyValueStore>,
}

impl ActorService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn add(&self, registries: &mut Registries, slots: ActorSlots) -> AppResult<PersonId> {
        let actor = Actor::new(slots, registries).map_err(|v| reject(KIND.label(), v))?;
        let id = actor.id();
        log::info!("[Actor] Saved: {}", actor.name());
        registries.insert_actor(actor);
        Ok(id)
    }

    pub fn update(&self, registries: &mut Registries, request: UpdateActorRequest) -> AppResult<()> {
        let current = registries
            .actors
            .get(&request.person_id)
            .ok_or_else(|| AppError::NotFound(format!("Actor {}", request.person_id)))?;

        let mut staged = current.clone();
        let changed = apply_update(&mut staged, &request).map_err(|v| reject(KIND.label(), v))?;

        let mut roles = IdentityRoles::stage(registries, request.person_id);
        if changed.contains(&"name") {
            roles.rename(staged.name()).map_err(|v| reject(KIND.label(), v))?;
        }

        log_update(&changed, &format!("actor {}", staged.name()));
        roles.actor = Some(staged);
        roles.publish(registries);
        Ok(())
    }

    /// Remove an actor and drop them from every cast
    pub fn destroy(&self, registries: &mut Registries, id: PersonId) -> AppResult<()> {
        let name = registries
            .actors
            .get(&id)
            .map(|actor| actor.name().to_string())
            .ok_or_else(|| AppError::NotFound(format!("Actor {}", id)))?;

        for movie_id in registries.remove_role(KIND, id).unwrap_or_default() {
            log::info!("Movie {} updated.", movie_id);
        }
        log::info!("Actor {} deleted.", name);
        Ok(())
    }

    pub fn retrieve_all(&self, registries: &mut Registries) -> AppResult<usize> {
        let table = load_table(self.store.as_ref(), KIND.table_key())?;
        Ok(Self::rebuild(registries, table))
    }

    /// Replace the actor registry with the records of `table`
    pub(crate) fn rebuild(registries: &mut Registries, table: Table) -> usize {
        registries.actors.clear();
        for (key, record) in decode_records::<ActorRecord>(KIND.table_key(), table) {
            match Actor::new(record.into_slots(), registries) {
                Ok(actor) => {
                    registries.insert_actor(actor);
                }
                Err(v) => log::warn!("{} while deserializing actor {}: {}", v.kind(), key, v),
            }
        }
        let loaded = registries.actors.len();
        log::info!("{} Actor records loaded.", loaded);
        loaded
    }

    pub fn save_all(&self, registries: &Registries) -> AppResult<usize> {
        let records = registries
            .actors
            .values()
            .map(|actor| (actor.id().to_string(), ActorRecord::from(actor)));
        let saved = save_table(self.store.as_ref(), KIND.table_key(), records)?;
        log::info!("{} actors saved.", saved);
        Ok(saved)
    }
}

fn apply_update(staged: &mut Actor, request: &UpdateActorRequest) -> Validation<Vec<&'static str>> {
    let mut changed = Vec::new();
    if let Some(name) = &request.name {
        if name != staged.name() {
            staged.set_name(name)?;
            changed.push("name");
        }
    }
    if let Some(agent) = &request.agent {
        if agent.as_deref() != staged.agent() {
            staged.set_agent(agent.as_deref())?;
            changed.push("agent");
        }
    }
    Ok(changed)
}
