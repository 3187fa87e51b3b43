// src/services/person_service.rs

use std::sync::Arc;

use crate::domain::{Person, PersonId, PersonKind, PersonSlots};
use crate::error::{AppError, AppResult};
use crate::registry::Registries;
use crate::repositories::{decode_records, load_table, save_table, KeyValueStore, PersonRecord, Table};

use super::{log_update, reject, ActorService, DirectorService, IdentityRoles};

const KIND: PersonKind = PersonKind::Person;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePersonRequest {
    pub person_id: PersonId,
    pub name: Option<String>,
}

pub struct PersonService {
    store: Arc<dyn KeyValueStore>,
}

impl PersonService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn add(&self, registries: &mut Registries, slots: PersonSlots) -> AppResult<PersonId> {
        let person = Person::new(slots, registries).map_err(|v| reject(KIND.label(), v))?;
        let id = person.id();
        log::info!("[Person] Saved: {}", person.name());
        registries.insert_person(person);
        Ok(id)
    }

    /// Rename a person. The name belongs to the identity, so every role
    /// registered under the identifier is renamed together.
    pub fn update(&self, registries: &mut Registries, request: UpdatePersonRequest) -> AppResult<()> {
        let id = request.person_id;
        if !registries.has_identity(id) {
            return Err(AppError::NotFound(format!("Person {}", id)));
        }

        let current_name = registries.person_name(id).unwrap_or_default().to_string();
        let mut roles = IdentityRoles::stage(registries, id);
        let changed = match request.name.as_deref() {
            Some(name) if name != current_name => {
                roles.rename(name).map_err(|v| reject(KIND.label(), v))?;
                vec!["name"]
            }
            _ => Vec::new(),
        };

        let subject = format!("person {}", request.name.as_deref().unwrap_or(&current_name));
        log_update(&changed, &subject);
        roles.publish(registries);
        Ok(())
    }

    /// Remove a person together with every subtype role they hold
    pub fn destroy(&self, registries: &mut Registries, id: PersonId) -> AppResult<()> {
        let name = registries
            .person_name(id)
            .map(str::to_string)
            .ok_or_else(|| AppError::NotFound(format!("Person {}", id)))?;

        for kind in PersonKind::SUBTYPES {
            for movie_id in registries.remove_role(kind, id).unwrap_or_default() {
                log::info!("Movie {} updated.", movie_id);
            }
        }
        // Dropping the last role leaves a plain entry behind
        registries.remove_role(KIND, id);
        log::info!("Person {} deleted.", name);
        Ok(())
    }

    /// Load the people table and every subtype table.
    ///
    /// All tables are read before any registry is touched, so a storage
    /// failure leaves the registries as they were.
    pub fn retrieve_all(&self, registries: &mut Registries) -> AppResult<usize> {
        let people = load_table(self.store.as_ref(), KIND.table_key())?;
        let mut subtype_tables = Vec::with_capacity(PersonKind::SUBTYPES.len());
        for kind in PersonKind::SUBTYPES {
            subtype_tables.push((kind, load_table(self.store.as_ref(), kind.table_key())?));
        }

        registries.people.clear();
        registries.actors.clear();
        registries.directors.clear();

        for (key, record) in decode_records::<PersonRecord>(KIND.table_key(), people) {
            match Person::new(record.into_slots(), registries) {
                Ok(person) => {
                    registries.insert_person(person);
                }
                Err(v) => log::warn!("{} while deserializing person {}: {}", v.kind(), key, v),
            }
        }
        for (kind, table) in subtype_tables {
            rebuild_subtype(kind, registries, table);
        }

        let loaded = registries.people.len();
        log::info!("{} Person records loaded.", loaded);
        Ok(loaded)
    }

    /// Save plain people only; subtype records go to their own tables
    pub fn save_all(&self, registries: &Registries) -> AppResult<usize> {
        let records = registries
            .plain_people()
            .map(|person| (person.id().to_string(), PersonRecord::from(person)));
        let saved = save_table(self.store.as_ref(), KIND.table_key(), records)?;
        log::info!("{} people saved.", saved);
        Ok(saved)
    }
}

fn rebuild_subtype(kind: PersonKind, registries: &mut Registries, table: Table) -> usize {
    match kind {
        PersonKind::Actor => ActorService::rebuild(registries, table),
        PersonKind::Director => DirectorService::rebuild(registries, table),
        PersonKind::Person => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MovieId, ViolationKind};
    use crate::registry::test_support::{pid, registries_with_movies};
    use crate::repositories::{MemoryStore, MockKeyValueStore};

    fn service() -> PersonService {
        PersonService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_accepts_smallest_untaken_id() {
        let service = service();
        let mut registries = registries_with_movies();

        // 1 to 6 and 14 are taken
        let err = service
            .add(&mut registries, PersonSlots::new(6, "Taken"))
            .unwrap_err();
        assert_eq!(err.violation().map(|v| v.kind()), Some(ViolationKind::Uniqueness));

        let id = service.add(&mut registries, PersonSlots::new(7, "Free")).unwrap();
        assert_eq!(id, pid(7));
    }

    #[test]
    fn test_add_without_name() {
        let service = service();
        let mut registries = registries_with_movies();
        let slots = PersonSlots {
            person_id: Some(20),
            name: None,
        };
        let err = service.add(&mut registries, slots).unwrap_err();
        assert_eq!(err.violation().map(|v| v.kind()), Some(ViolationKind::MandatoryValue));
        assert!(!registries.has_identity(pid(20)));
    }

    #[test]
    fn test_update_renames_every_role() {
        let service = service();
        let mut registries = registries_with_movies();

        service
            .update(
                &mut registries,
                UpdatePersonRequest {
                    person_id: pid(3),
                    name: Some("Q. Tarantino".to_string()),
                },
            )
            .unwrap();

        assert_eq!(registries.actors.get(&pid(3)).unwrap().name(), "Q. Tarantino");
        assert_eq!(registries.directors.get(&pid(3)).unwrap().name(), "Q. Tarantino");
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let service = service();
        let mut registries = registries_with_movies();
        let before = registries.clone();

        let err = service
            .update(
                &mut registries,
                UpdatePersonRequest {
                    person_id: pid(14),
                    name: Some(" ".to_string()),
                },
            )
            .unwrap_err();

        assert_eq!(err.violation().map(|v| v.kind()), Some(ViolationKind::Range));
        assert_eq!(registries, before);
    }

    #[test]
    fn test_destroy_cascades_to_subtypes() {
        let service = service();
        let mut registries = registries_with_movies();

        service.destroy(&mut registries, pid(3)).unwrap();

        assert!(!registries.has_identity(pid(3)));
        let pulp_fiction = registries.movies.get(&MovieId::new(1).unwrap()).unwrap();
        assert_eq!(pulp_fiction.director(), None);
        assert!(!pulp_fiction.actors().contains(&pid(3)));
    }

    #[test]
    fn test_save_writes_plain_people_only() {
        let store = Arc::new(MemoryStore::new());
        let service = PersonService::new(store.clone());
        let registries = registries_with_movies();

        assert_eq!(service.save_all(&registries).unwrap(), 1);
        assert_eq!(
            store.read("people").unwrap().as_deref(),
            Some(r#"{"14":{"personId":14,"name":"John Forbes Nash"}}"#)
        );
    }

    #[test]
    fn test_retrieve_loads_subtypes() {
        let store = Arc::new(MemoryStore::new());
        let registries = registries_with_movies();
        PersonService::new(store.clone()).save_all(&registries).unwrap();
        ActorService::new(store.clone()).save_all(&registries).unwrap();
        DirectorService::new(store.clone()).save_all(&registries).unwrap();

        let mut loaded = Registries::new();
        assert_eq!(PersonService::new(store).retrieve_all(&mut loaded).unwrap(), 1);
        assert_eq!(loaded.people, registries.people);
        assert_eq!(loaded.actors, registries.actors);
        assert_eq!(loaded.directors, registries.directors);
    }

    #[test]
    fn test_storage_failure_leaves_registries_untouched() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_read()
            .withf(|key| key == "people")
            .returning(|_| Ok(Some("{}".to_string())));
        store
            .expect_read()
            .withf(|key| key == "actors")
            .returning(|_| Err(AppError::Storage("disk unplugged".to_string())));
        let service = PersonService::new(Arc::new(store));
        let mut registries = registries_with_movies();
        let before = registries.clone();

        let err = service.retrieve_all(&mut registries).unwrap_err();

        assert!(err.is_storage_failure());
        assert_eq!(registries, before);
    }
}
