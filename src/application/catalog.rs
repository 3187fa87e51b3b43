// src/application/catalog.rs
//
// The catalog: registries plus the four services, sharing one store.
// Built once at startup from configuration and handed to command handlers.

use std::sync::Arc;

use serde::Serialize;

use crate::config::{CatalogConfig, StorageBackend};
use crate::db::{
    create_connection_pool, get_connection, get_database_path, initialize_database,
    verify_database_integrity,
};
use crate::domain::{
    ActorSlots, DirectorSlots, Movie, MovieId, MovieSlots, PersonId, PersonKind, PersonSlots,
};
use crate::error::AppResult;
use crate::registry::Registries;
use crate::repositories::{FileStore, KeyValueStore, MemoryStore, SqliteStore};
use crate::services::{
    ActorService, DirectorService, MovieService, PersonService, UpdateActorRequest,
    UpdateDirectorRequest, UpdateMovieRequest, UpdatePersonRequest,
};

use super::test_data;

/// Number of records per registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub people: usize,
    pub actors: usize,
    pub directors: usize,
    pub movies: usize,
}

pub struct Catalog {
    store: Arc<dyn KeyValueStore>,
    registries: Registries,
    person_service: PersonService,
    actor_service: ActorService,
    director_service: DirectorService,
    movie_service: MovieService,
}

/// Open the store selected by `config`
pub fn open_store(config: &CatalogConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    let storage = &config.storage;
    let store: Arc<dyn KeyValueStore> = match storage.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::new(storage.resolved_data_dir()?)),
        StorageBackend::Sqlite => {
            let data_dir = storage.resolved_data_dir()?;
            let db_path = get_database_path(Some(&data_dir))?;
            let pool = create_connection_pool(&db_path, storage.pool_size)?;
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
            drop(conn);
            Arc::new(SqliteStore::new(Arc::new(pool)))
        }
    };
    log::debug!("Opened {:?} storage", storage.backend);
    Ok(store)
}

impl Catalog {
    /// An empty catalog over `store`; call [`Catalog::load_all`] to read it
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            person_service: PersonService::new(store.clone()),
            actor_service: ActorService::new(store.clone()),
            director_service: DirectorService::new(store.clone()),
            movie_service: MovieService::new(store.clone()),
            registries: Registries::new(),
            store,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Open the configured store and load everything in it
    pub fn open(config: &CatalogConfig) -> AppResult<Self> {
        let mut catalog = Self::new(open_store(config)?);
        catalog.load_all()?;
        Ok(catalog)
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            people: self.registries.people.len(),
            actors: self.registries.actors.len(),
            directors: self.registries.directors.len(),
            movies: self.registries.movies.len(),
        }
    }

    /// Load every table. People and their subtypes come first so movie
    /// references resolve.
    ///
    /// Tables are rebuilt into fresh registries that replace the current ones
    /// only when every read succeeded.
    pub fn load_all(&mut self) -> AppResult<CatalogStats> {
        let mut loaded = Registries::new();
        self.person_service.retrieve_all(&mut loaded)?;
        self.movie_service.retrieve_all(&mut loaded)?;
        self.registries = loaded;
        Ok(self.stats())
    }

    pub fn save_all(&self) -> AppResult<()> {
        self.person_service.save_all(&self.registries)?;
        self.actor_service.save_all(&self.registries)?;
        self.director_service.save_all(&self.registries)?;
        self.movie_service.save_all(&self.registries)?;
        Ok(())
    }

    /// Empty every registry and every stored table
    pub fn clear_data(&mut self) -> AppResult<()> {
        for key in PersonKind::SUBTYPES
            .iter()
            .map(|kind| kind.table_key())
            .chain([PersonKind::Person.table_key(), "movies"])
        {
            self.store.write(key, "{}")?;
        }
        self.registries.clear();
        log::info!("All data cleared.");
        Ok(())
    }

    /// Replace the catalog contents with the demo data set and save it
    pub fn generate_test_data(&mut self) -> AppResult<CatalogStats> {
        self.replace_contents(
            test_data::people(),
            test_data::directors(),
            test_data::actors(),
            test_data::movies(),
        )
    }

    /// Build the records into fresh registries and publish them only if
    /// every record is accepted
    fn replace_contents(
        &mut self,
        people: Vec<PersonSlots>,
        directors: Vec<DirectorSlots>,
        actors: Vec<ActorSlots>,
        movies: Vec<MovieSlots>,
    ) -> AppResult<CatalogStats> {
        let mut staged = Registries::new();
        for slots in people {
            self.person_service.add(&mut staged, slots)?;
        }
        for slots in directors {
            self.director_service.add(&mut staged, slots)?;
        }
        for slots in actors {
            self.actor_service.add(&mut staged, slots)?;
        }
        for slots in movies {
            self.movie_service.add(&mut staged, slots)?;
        }
        self.registries = staged;
        self.save_all()?;
        Ok(self.stats())
    }

    pub fn add_person(&mut self, slots: PersonSlots) -> AppResult<PersonId> {
        self.person_service.add(&mut self.registries, slots)
    }

    pub fn add_actor(&mut self, slots: ActorSlots) -> AppResult<PersonId> {
        self.actor_service.add(&mut self.registries, slots)
    }

    pub fn add_director(&mut self, slots: DirectorSlots) -> AppResult<PersonId> {
        self.director_service.add(&mut self.registries, slots)
    }

    pub fn add_movie(&mut self, slots: MovieSlots) -> AppResult<MovieId> {
        self.movie_service.add(&mut self.registries, slots)
    }

    pub fn update_person(&mut self, request: UpdatePersonRequest) -> AppResult<()> {
        self.person_service.update(&mut self.registries, request)
    }

    pub fn update_actor(&mut self, request: UpdateActorRequest) -> AppResult<()> {
        self.actor_service.update(&mut self.registries, request)
    }

    pub fn update_director(&mut self, request: UpdateDirectorRequest) -> AppResult<()> {
        self.director_service.update(&mut self.registries, request)
    }

    pub fn update_movie(&mut self, request: UpdateMovieRequest) -> AppResult<()> {
        self.movie_service.update(&mut self.registries, request)
    }

    /// Remove `id` from the registry of `kind` (a Person removes every role)
    pub fn destroy_person(&mut self, kind: PersonKind, id: PersonId) -> AppResult<()> {
        match kind {
            PersonKind::Person => self.person_service.destroy(&mut self.registries, id),
            PersonKind::Actor => self.actor_service.destroy(&mut self.registries, id),
            PersonKind::Director => self.director_service.destroy(&mut self.registries, id),
        }
    }

    pub fn destroy_movie(&mut self, id: MovieId) -> AppResult<()> {
        self.movie_service.destroy(&mut self.registries, id)
    }

    pub fn movies_directed_by(&self, id: PersonId) -> Vec<&Movie> {
        self.registries.movies_directed_by(id)
    }

    pub fn movies_played_by(&self, id: PersonId) -> Vec<&Movie> {
        self.registries.movies_played_by(id)
    }
}
