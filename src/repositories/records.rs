// src/repositories/records.rs
//
// Persisted shapes of the entity types
//
// Field names are camelCase. Records carry raw slot values; turning them back
// into entities goes through the checked constructors.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Actor, ActorSlots, Director, Movie, MovieCategory, MovieSlots, Person, PersonSlots};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(default)]
    pub person_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Directors persist exactly like plain people
pub type DirectorRecord = PersonRecord;

impl PersonRecord {
    pub fn into_slots(self) -> PersonSlots {
        PersonSlots {
            person_id: self.person_id,
            name: self.name,
        }
    }
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        Self {
            person_id: Some(person.id().into()),
            name: Some(person.name().to_string()),
        }
    }
}

impl From<&Director> for PersonRecord {
    fn from(director: &Director) -> Self {
        Self::from(director.person())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRecord {
    #[serde(default)]
    pub person_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
}

impl ActorRecord {
    pub fn into_slots(self) -> ActorSlots {
        ActorSlots {
            person_id: self.person_id,
            name: self.name,
            agent: self.agent,
        }
    }
}

impl From<&Actor> for ActorRecord {
    fn from(actor: &Actor) -> Self {
        Self {
            person_id: Some(actor.id().into()),
            name: Some(actor.name().to_string()),
            agent: actor.agent().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    #[serde(default, alias = "id")]
    pub movie_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, with = "release_date_format")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, alias = "director_id", skip_serializing_if = "Option::is_none")]
    pub director_id: Option<i64>,
    #[serde(default)]
    pub actor_id_refs: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MovieCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv_series_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_no: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

impl MovieRecord {
    pub fn into_slots(self) -> MovieSlots {
        MovieSlots {
            movie_id: self.movie_id,
            title: self.title,
            release_date: self.release_date,
            director_id: self.director_id,
            actor_id_refs: self.actor_id_refs,
            category: self.category,
            tv_series_name: self.tv_series_name,
            episode_no: self.episode_no,
            about: self.about,
        }
    }
}

impl From<&Movie> for MovieRecord {
    fn from(movie: &Movie) -> Self {
        Self {
            movie_id: Some(movie.id().into()),
            title: Some(movie.title().to_string()),
            release_date: Some(movie.release_date()),
            director_id: movie.director().map(i64::from),
            actor_id_refs: movie.actors().iter().copied().map(i64::from).collect(),
            category: movie.category(),
            tv_series_name: movie.tv_series_name().map(str::to_string),
            episode_no: movie.episode_no().map(i64::from),
            about: movie.about().map(str::to_string),
        }
    }
}

/// Release dates are written as `YYYY-MM-DD`. Older data may hold a full
/// ISO-8601 timestamp, which is read back as its UTC calendar date.
mod release_date_format {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|text| parse_stored_date(&text).map_err(serde::de::Error::custom))
            .transpose()
    }

    fn parse_stored_date(text: &str) -> Result<NaiveDate, String> {
        let text = text.trim();
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(text)
            .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
            .map_err(|e| format!("invalid release date '{}': {}", text, e))
    }
}
