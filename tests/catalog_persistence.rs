// End-to-end catalog behavior over real stores

use std::sync::Arc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

use moviedb::domain::{check_movie_id_as_id, check_person_id_as_id};
use moviedb::{
    ActorSlots, Catalog, CatalogConfig, DirectorSlots, FileStore, KeyValueStore, MovieCategory,
    MovieId, MovieSlots, PersonId, PersonKind, PersonSlots, StorageBackend, UpdateMovieRequest,
    ViolationKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn movie_id(raw: i64) -> MovieId {
    MovieId::new(raw).unwrap()
}

/// Director 6, actors 3, 5 and 6, and "Pulp Fiction" (1)
fn pulp_fiction_catalog(store: Arc<dyn KeyValueStore>) -> Catalog {
    let mut catalog = Catalog::new(store);
    catalog
        .add_director(DirectorSlots::new(6, "Quentin Tarantino"))
        .unwrap();
    catalog.add_actor(ActorSlots::new(3, "Uma Thurman").with_agent("Jane Doe")).unwrap();
    catalog.add_actor(ActorSlots::new(5, "John Travolta")).unwrap();
    catalog.add_actor(ActorSlots::new(6, "Quentin Tarantino")).unwrap();
    catalog.add_person(PersonSlots::new(14, "John Forbes Nash")).unwrap();
    catalog
        .add_movie(
            MovieSlots::new(1, "Pulp Fiction", date(1994, 5, 12), 6).with_actors([3, 5, 6]),
        )
        .unwrap();
    catalog
}

#[test]
fn test_file_store_round_trip_reproduces_registries() {
    let dir = TempDir::new().unwrap();
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
    let catalog = pulp_fiction_catalog(store.clone());
    catalog.save_all().unwrap();

    let raw = std::fs::read_to_string(dir.path().join("movies.json")).unwrap();
    let movies: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(movies["1"]["movieId"], json!(1));
    assert_eq!(movies["1"]["title"], json!("Pulp Fiction"));
    assert_eq!(movies["1"]["directorId"], json!(6));
    assert_eq!(movies["1"]["actorIdRefs"], json!([3, 5, 6]));

    let mut reloaded = Catalog::new(Arc::new(FileStore::new(dir.path())));
    let stats = reloaded.load_all().unwrap();
    assert_eq!(stats.movies, 1);
    assert_eq!(stats.actors, 3);
    assert_eq!(stats.people, 1);
    assert_eq!(reloaded.registries(), catalog.registries());
}

#[test]
fn test_clear_then_reload_is_empty() {
    let dir = TempDir::new().unwrap();
    let mut catalog = pulp_fiction_catalog(Arc::new(FileStore::new(dir.path())));
    catalog.save_all().unwrap();
    catalog.clear_data().unwrap();

    let mut reloaded = Catalog::new(Arc::new(FileStore::new(dir.path())));
    let stats = reloaded.load_all().unwrap();
    assert_eq!(stats, Default::default());
}

#[test]
fn test_sqlite_backend_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut config = CatalogConfig::default();
    config.storage.backend = StorageBackend::Sqlite;
    config.storage.data_dir = Some(dir.path().to_path_buf());

    let mut catalog = Catalog::open(&config).unwrap();
    catalog.generate_test_data().unwrap();
    let expected = catalog.registries().clone();
    drop(catalog);

    let reopened = Catalog::open(&config).unwrap();
    assert_eq!(reopened.registries(), &expected);
}

#[test]
fn test_failing_update_leaves_movie_untouched() {
    let mut catalog = pulp_fiction_catalog(Arc::new(moviedb::MemoryStore::new()));
    catalog.add_actor(ActorSlots::new(7, "Bruce Willis")).unwrap();
    let before = catalog.registries().movies.get(&movie_id(1)).cloned().unwrap();

    let mut request = UpdateMovieRequest::new(movie_id(1));
    request.title = Some(String::new());
    request.actor_id_refs_to_add = vec![7];
    request.actor_id_refs_to_remove = vec![3];
    let error = catalog.update_movie(request).unwrap_err();

    assert_eq!(error.violation().map(|v| v.kind()), Some(ViolationKind::MandatoryValue));
    assert_eq!(catalog.registries().movies.get(&movie_id(1)), Some(&before));
}

#[test]
fn test_add_and_remove_non_member_only_adds() {
    let mut catalog = pulp_fiction_catalog(Arc::new(moviedb::MemoryStore::new()));
    catalog.add_actor(ActorSlots::new(7, "Bruce Willis")).unwrap();
    catalog.add_movie(MovieSlots::new(2, "Die Hard", date(1988, 7, 15), 6).with_actors([7])).unwrap();

    let mut request = UpdateMovieRequest::new(movie_id(2));
    request.actor_id_refs_to_add = vec![5];
    request.actor_id_refs_to_remove = vec![3];
    catalog.update_movie(request).unwrap();

    let cast: Vec<u32> = catalog.registries().movies.get(&movie_id(2)).unwrap()
        .actors()
        .iter()
        .map(|id| id.get())
        .collect();
    assert_eq!(cast, vec![5, 7]);
}

#[test]
fn test_destroying_director_clears_reference() {
    let mut catalog = pulp_fiction_catalog(Arc::new(moviedb::MemoryStore::new()));
    let tarantino = PersonId::new(6).unwrap();
    catalog.destroy_person(PersonKind::Director, tarantino).unwrap();

    let movie = catalog.registries().movies.get(&movie_id(1)).unwrap();
    assert_eq!(movie.director(), None);
    assert_eq!(movie.title(), "Pulp Fiction");
    assert!(movie.actors().contains(&tarantino));
    assert!(catalog.movies_directed_by(tarantino).is_empty());
    assert_eq!(catalog.movies_played_by(tarantino).len(), 1);
}

#[test]
fn test_restored_movie_without_director_survives_reload() {
    let dir = TempDir::new().unwrap();
    let mut catalog = pulp_fiction_catalog(Arc::new(FileStore::new(dir.path())));
    catalog
        .destroy_person(PersonKind::Director, PersonId::new(6).unwrap())
        .unwrap();
    catalog.save_all().unwrap();

    let mut reloaded = Catalog::new(Arc::new(FileStore::new(dir.path())));
    reloaded.load_all().unwrap();
    let movie = reloaded.registries().movies.get(&movie_id(1)).unwrap();
    assert_eq!(movie.director(), None);
}

#[test]
fn test_unknown_director_is_rejected() {
    let mut catalog = pulp_fiction_catalog(Arc::new(moviedb::MemoryStore::new()));
    let error = catalog
        .add_movie(MovieSlots::new(2, "Star Wars", date(1977, 5, 25), 99))
        .unwrap_err();
    assert_eq!(
        error.violation().map(|v| v.kind()),
        Some(ViolationKind::ReferentialIntegrity)
    );
    assert!(!catalog.registries().movies.contains(&movie_id(2)));
}

#[test]
fn test_smallest_untaken_identifier_is_accepted() {
    let catalog = pulp_fiction_catalog(Arc::new(moviedb::MemoryStore::new()));
    let registries = catalog.registries();

    assert!(check_movie_id_as_id(Some(1), registries).is_err());
    assert_eq!(check_movie_id_as_id(Some(2), registries).unwrap(), movie_id(2));

    // 3, 5, 6 and 14 are taken across the identity space
    let taken = check_person_id_as_id(Some(3), PersonKind::Person, registries).unwrap_err();
    assert_eq!(taken.kind(), ViolationKind::Uniqueness);
    assert_eq!(
        check_person_id_as_id(Some(1), PersonKind::Person, registries).unwrap(),
        PersonId::new(1).unwrap()
    );
    assert!(check_person_id_as_id(Some(3), PersonKind::Director, registries).is_ok());
}

#[test]
fn test_category_is_frozen_once_set() {
    let mut catalog = pulp_fiction_catalog(Arc::new(moviedb::MemoryStore::new()));
    catalog
        .add_movie(
            MovieSlots::new(5, "A Beautiful Mind", date(2001, 12, 21), 6)
                .biography("John Forbes Nash"),
        )
        .unwrap();
    let before = catalog.registries().movies.get(&movie_id(5)).cloned().unwrap();

    let mut request = UpdateMovieRequest::new(movie_id(5));
    request.category = Some(Some(MovieCategory::TvSeriesEpisode));
    request.tv_series_name = Some("The Loudest Voice".to_string());
    request.episode_no = Some(6);
    let error = catalog.update_movie(request).unwrap_err();

    assert_eq!(error.violation().map(|v| v.kind()), Some(ViolationKind::FrozenValue));
    let after = catalog.registries().movies.get(&movie_id(5)).unwrap();
    assert_eq!(after, &before);
    assert_eq!(after.category(), Some(MovieCategory::Biography));
    assert_eq!(after.about(), Some("John Forbes Nash"));
}

#[test]
fn test_segment_field_outside_category_is_rejected() {
    let mut catalog = pulp_fiction_catalog(Arc::new(moviedb::MemoryStore::new()));
    catalog
        .add_movie(
            MovieSlots::new(5, "A Beautiful Mind", date(2001, 12, 21), 6)
                .biography("John Forbes Nash"),
        )
        .unwrap();

    for id in [1, 5] {
        let mut request = UpdateMovieRequest::new(movie_id(id));
        request.tv_series_name = Some("The Loudest Voice".to_string());
        let error = catalog.update_movie(request).unwrap_err();
        assert_eq!(error.violation().map(|v| v.kind()), Some(ViolationKind::Segment));
    }
    assert_eq!(catalog.registries().movies.get(&movie_id(1)).unwrap().tv_series_name(), None);
}

#[test]
fn test_destroying_only_role_keeps_the_person() {
    let dir = TempDir::new().unwrap();
    let mut catalog = pulp_fiction_catalog(Arc::new(FileStore::new(dir.path())));
    let nash = PersonId::new(14).unwrap();
    catalog.add_actor(ActorSlots::new(14, "John Forbes Nash")).unwrap();
    assert_eq!(catalog.stats().people, 0);

    catalog.destroy_person(PersonKind::Actor, nash).unwrap();
    catalog.save_all().unwrap();

    let mut reloaded = Catalog::new(Arc::new(FileStore::new(dir.path())));
    reloaded.load_all().unwrap();
    let registries = reloaded.registries();
    assert!(!registries.actors.contains(&nash));
    assert_eq!(registries.person_name(nash), Some("John Forbes Nash"));
    assert_eq!(registries.kinds_of(nash), vec![PersonKind::Person]);
}
