// src/services/director_service.rs

use std::sync::Arc;

use crate::domain::{Director, DirectorSlots, PersonId, PersonKind, Validation};
use crate::error::{AppError, AppResult};
use crate::registry::Registries;
use crate::repositories::{decode_records, load_table, save_table, DirectorRecord, KeyValueStore, Table};

use super::{log_update, reject, IdentityRoles};

const KIND: PersonKind = PersonKind::Director;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDirectorRequest {
    pub person_id: PersonId,
    pub name: Option<String>,
}

pub struct DirectorService {
    store: Arc<dyn KeyValueStore>,
}

impl DirectorService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn add(&self, registries: &mut Registries, slots: DirectorSlots) -> AppResult<PersonId> {
        let director = Director::new(slots, registries).map_err(|v| reject(KIND.label(), v))?;
        let id = director.id();
        log::info!("[Director] Saved: {}", director.name());
        registries.insert_director(director);
        Ok(id)
    }

    pub fn update(&self, registries: &mut Registries, request: UpdateDirectorRequest) -> AppResult<()> {
        let current = registries
            .directors
            .get(&request.person_id)
            .ok_or_else(|| AppError::NotFound(format!("Director {}", request.person_id)))?;

        let mut staged = current.clone();
        let changed = apply_update(&mut staged, &request).map_err(|v| reject(KIND.label(), v))?;

        let mut roles = IdentityRoles::stage(registries, request.person_id);
        if changed.contains(&"name") {
            roles.rename(staged.name()).map_err(|v| reject(KIND.label(), v))?;
        }

        log_update(&changed, &format!("director {}", staged.name()));
        roles.director = Some(staged);
        roles.publish(registries);
        Ok(())
    }

    /// Remove a director. Movies they directed are kept with no director.
    pub fn destroy(&self, registries: &mut Registries, id: PersonId) -> AppResult<()> {
        let name = registries
            .directors
            .get(&id)
            .map(|director| director.name().to_string())
            .ok_or_else(|| AppError::NotFound(format!("Director {}", id)))?;

        for movie_id in registries.remove_role(KIND, id).unwrap_or_default() {
            log::info!("Movie {} updated.", movie_id);
        }
        log::info!("Director {} deleted.", name);
        Ok(())
    }

    pub fn retrieve_all(&self, registries: &mut Registries) -> AppResult<usize> {
        let table = load_table(self.store.as_ref(), KIND.table_key())?;
        Ok(Self::rebuild(registries, table))
    }

    /// Replace the director registry with the records of `table`
    pub(crate) fn rebuild(registries: &mut Registries, table: Table) -> usize {
        registries.directors.clear();
        for (key, record) in decode_records::<DirectorRecord>(KIND.table_key(), table) {
            match Director::new(record.into_slots(), registries) {
                Ok(director) => {
                    registries.insert_director(director);
                }
                Err(v) => log::warn!("{} while deserializing director {}: {}", v.kind(), key, v),
            }
        }
        let loaded = registries.directors.len();
        log::info!("{} Director records loaded.", loaded);
        loaded
    }

    pub fn save_all(&self, registries: &Registries) -> AppResult<usize> {
        let records = registries
            .directors
            .values()
            .map(|director| (director.id().to_string(), DirectorRecord::from(director)));
        let saved = save_table(self.store.as_ref(), KIND.table_key(), records)?;
        log::info!("{} directors saved.", saved);
        Ok(saved)
    }
}

fn apply_update(staged: &mut Director, request: &UpdateDirectorRequest) -> Validation<Vec<&'static str>> {
    let mut changed = Vec::new();
    if let Some(name) = &request.name {
        if name != staged.name() {
            staged.set_name(name)?;
            changed.push("name");
        }
    }
    Ok(changed)
}
