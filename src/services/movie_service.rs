// src/services/movie_service.rs

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{
    validate_movie, Movie, MovieCategory, MovieId, MovieSlots, SegmentFields, Validation,
};
use crate::error::{AppError, AppResult};
use crate::registry::Registries;
use crate::repositories::{decode_records, load_table, save_table, KeyValueStore, MovieRecord};

use super::{log_update, reject};

const TABLE: &str = "movies";
const LABEL: &str = "Movie";

/// Changes to apply to one movie in a single all-or-nothing step.
///
/// `None` leaves a field as it is. Actor changes are deltas against the
/// current cast, applied additions first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMovieRequest {
    pub movie_id: MovieId,
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub director_id: Option<i64>,
    pub actor_id_refs_to_add: Vec<i64>,
    pub actor_id_refs_to_remove: Vec<i64>,
    /// `Some(None)` asks to remove the category, which is always refused
    /// once one is set
    pub category: Option<Option<MovieCategory>>,
    pub tv_series_name: Option<String>,
    pub episode_no: Option<i64>,
    pub about: Option<String>,
}

impl UpdateMovieRequest {
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            title: None,
            release_date: None,
            director_id: None,
            actor_id_refs_to_add: Vec::new(),
            actor_id_refs_to_remove: Vec::new(),
            category: None,
            tv_series_name: None,
            episode_no: None,
            about: None,
        }
    }

    fn segment_fields(&self) -> SegmentFields {
        SegmentFields {
            tv_series_name: self.tv_series_name.clone(),
            episode_no: self.episode_no,
            about: self.about.clone(),
        }
    }
}

pub struct MovieService {
    store: Arc<dyn KeyValueStore>,
}

impl MovieService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn add(&self, registries: &mut Registries, slots: MovieSlots) -> AppResult<MovieId> {
        let movie = Movie::new(slots, registries).map_err(|v| reject(LABEL, v))?;
        let id = movie.id();
        log::info!("{} created!", movie);
        registries.movies.insert(movie);
        Ok(id)
    }

    pub fn update(&self, registries: &mut Registries, request: UpdateMovieRequest) -> AppResult<()> {
        let id = request.movie_id;
        let current = registries
            .movies
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Movie {}", id)))?;

        let mut staged = current.clone();
        let changed =
            apply_update(&mut staged, &request, registries).map_err(|v| reject(LABEL, v))?;
        validate_movie(&staged, registries).map_err(|v| reject(LABEL, v))?;

        log_update(&changed, &format!("movie {}", id));
        registries.movies.insert(staged);
        Ok(())
    }

    pub fn destroy(&self, registries: &mut Registries, id: MovieId) -> AppResult<()> {
        match registries.movies.remove(&id) {
            Some(movie) => {
                log::info!("{} deleted!", movie);
                Ok(())
            }
            None => {
                log::warn!("There is no movie with movie ID {} in the database!", id);
                Err(AppError::NotFound(format!("Movie {}", id)))
            }
        }
    }

    /// Rebuild the movie registry from storage.
    ///
    /// People, actors and directors must be loaded first so references resolve.
    pub fn retrieve_all(&self, registries: &mut Registries) -> AppResult<usize> {
        let table = load_table(self.store.as_ref(), TABLE)?;

        registries.movies.clear();
        for (key, record) in decode_records::<MovieRecord>(TABLE, table) {
            match Movie::restore(record.into_slots(), registries) {
                Ok(movie) => {
                    registries.movies.insert(movie);
                }
                Err(v) => log::warn!("{} while deserializing movie {}: {}", v.kind(), key, v),
            }
        }

        let loaded = registries.movies.len();
        log::info!("{} movies loaded.", loaded);
        Ok(loaded)
    }

    pub fn save_all(&self, registries: &Registries) -> AppResult<usize> {
        let records = registries
            .movies
            .values()
            .map(|movie| (movie.id().to_string(), MovieRecord::from(movie)));
        let saved = save_table(self.store.as_ref(), TABLE, records)?;
        log::info!("{} movies records saved.", saved);
        Ok(saved)
    }
}

/// Apply `request` to the staged copy, returning the names of changed properties
fn apply_update(
    staged: &mut Movie,
    request: &UpdateMovieRequest,
    registries: &Registries,
) -> Validation<Vec<&'static str>> {
    let mut changed = Vec::new();

    if let Some(title) = &request.title {
        if title != staged.title() {
            staged.set_title(title)?;
            changed.push("title");
        }
    }
    if let Some(release_date) = request.release_date {
        if release_date != staged.release_date() {
            staged.set_release_date(release_date)?;
            changed.push("releaseDate");
        }
    }

    if !request.actor_id_refs_to_add.is_empty() {
        for actor_id in &request.actor_id_refs_to_add {
            staged.add_actor(*actor_id, registries)?;
        }
        changed.push("actors(added)");
    }
    if !request.actor_id_refs_to_remove.is_empty() {
        for actor_id in &request.actor_id_refs_to_remove {
            staged.remove_actor(*actor_id, registries)?;
        }
        changed.push("actors(removed)");
    }

    if let Some(director_id) = request.director_id {
        if staged.director().map(i64::from) != Some(director_id) {
            staged.set_director(director_id, registries)?;
            changed.push("director");
        }
    }

    let before = staged.clone();
    match request.category {
        Some(Some(category)) => staged.set_category(category, request.segment_fields())?,
        Some(None) => {
            staged.unset_category()?;
            staged.set_segment_fields(request.segment_fields())?;
        }
        None => staged.set_segment_fields(request.segment_fields())?,
    }
    if before.category().is_none() && staged.category().is_some() {
        changed.push("category");
    }
    if before.tv_series_name() != staged.tv_series_name() {
        changed.push("tvSeriesName");
    }
    if before.episode_no() != staged.episode_no() {
        changed.push("episodeNo");
    }
    if before.about() != staged.about() {
        changed.push("about");
    }

    Ok(changed)
}
