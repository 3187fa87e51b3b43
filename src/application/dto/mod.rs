// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are presentation-friendly representations
// - Inputs arrive as raw text; commands turn them into slot records
// - Outputs are built FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Actor, Director, Movie, Person, PersonId, PersonKind};
use crate::registry::{PersonSummary, Registries};

// ============================================================================
// PERSON DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDto {
    pub id: u32,
    pub name: String,
    pub roles: Vec<PersonKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
}

impl PersonDto {
    pub fn from_summary(summary: PersonSummary, registries: &Registries) -> Self {
        Self {
            agent: registries
                .actors
                .get(&summary.id)
                .and_then(Actor::agent)
                .map(str::to_string),
            id: summary.id.get(),
            name: summary.name,
            roles: summary.kinds,
        }
    }
}

impl From<&Person> for PersonDto {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id().get(),
            name: person.name().to_string(),
            roles: vec![PersonKind::Person],
            agent: None,
        }
    }
}

impl From<&Actor> for PersonDto {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id().get(),
            name: actor.name().to_string(),
            roles: vec![PersonKind::Actor],
            agent: actor.agent().map(str::to_string),
        }
    }
}

impl From<&Director> for PersonDto {
    fn from(director: &Director) -> Self {
        Self {
            id: director.id().get(),
            name: director.name().to_string(),
            roles: vec![PersonKind::Director],
            agent: None,
        }
    }
}

/// A person referenced from a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRefDto {
    pub id: u32,
    pub name: Option<String>,
}

impl PersonRefDto {
    fn resolve(id: PersonId, registries: &Registries) -> Self {
        Self {
            id: id.get(),
            name: registries.person_name(id).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePersonDto {
    pub role: PersonKind,
    pub person_id: String,
    pub name: String,
    /// Only meaningful for actors
    pub agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePersonDto {
    pub role: PersonKind,
    pub person_id: String,
    pub name: Option<String>,
    pub agent: Option<String>,
    pub clear_agent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonMoviesDto {
    pub person: PersonDto,
    pub directed: Vec<MovieDto>,
    pub played: Vec<MovieDto>,
}

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: u32,
    pub title: String,
    pub release_date: String,
    pub director: Option<PersonRefDto>,
    pub actors: Vec<PersonRefDto>,
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tv_series_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_no: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

impl MovieDto {
    pub fn from_movie(movie: &Movie, registries: &Registries) -> Self {
        Self {
            id: movie.id().get(),
            title: movie.title().to_string(),
            release_date: movie.release_date().format("%Y-%m-%d").to_string(),
            director: movie
                .director()
                .map(|id| PersonRefDto::resolve(id, registries)),
            actors: movie
                .actors()
                .iter()
                .map(|id| PersonRefDto::resolve(*id, registries))
                .collect(),
            category: movie.category().map(|category| category.label().to_string()),
            tv_series_name: movie.tv_series_name().map(str::to_string),
            episode_no: movie.episode_no(),
            about: movie.about().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMovieDto {
    pub movie_id: String,
    pub title: String,
    pub release_date: String,
    pub director_id: String,
    pub actor_ids: Vec<String>,
    /// Category code or name
    pub category: Option<String>,
    pub tv_series_name: Option<String>,
    pub episode_no: Option<String>,
    pub about: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMovieDto {
    pub movie_id: String,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub director_id: Option<String>,
    pub add_actor_ids: Vec<String>,
    pub remove_actor_ids: Vec<String>,
    /// An empty string asks to remove the category
    pub category: Option<String>,
    pub tv_series_name: Option<String>,
    pub episode_no: Option<String>,
    pub about: Option<String>,
}
