use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::category::MovieCategory;
use super::entity::Movie;
use crate::domain::{is_blank, ConstraintViolation, MovieId, PersonId, Validation};
use crate::registry::Registries;

pub const TITLE_LENGTH_MAX: usize = 120;

/// Earliest accepted release date (the first public film screening)
pub fn release_date_min() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap_or(NaiveDate::MIN)
}

fn iso_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"))
}

/// Format check only; absent is acceptable
pub fn check_movie_id(movie_id: Option<i64>) -> Validation<Option<MovieId>> {
    movie_id.map(MovieId::new).transpose()
}

/// Checks a movie id used as the identifier of a new movie
pub fn check_movie_id_as_id(movie_id: Option<i64>, registries: &Registries) -> Validation<MovieId> {
    let id = check_movie_id(movie_id)?.ok_or_else(|| {
        ConstraintViolation::MandatoryValue("A value for the movie ID must be provided!".to_string())
    })?;
    if registries.movies.contains(&id) {
        return Err(ConstraintViolation::Uniqueness(format!(
            "There is already a movie record with movie ID {}",
            id
        )));
    }
    Ok(id)
}

pub fn check_title(title: Option<&str>) -> Validation {
    match title {
        None | Some("") => Err(ConstraintViolation::MandatoryValue(
            "A title must be provided!".to_string(),
        )),
        Some(t) if is_blank(t) => Err(ConstraintViolation::Range(
            "The title must be a non-empty string!".to_string(),
        )),
        Some(t) if t.chars().count() > TITLE_LENGTH_MAX => Err(ConstraintViolation::Range(
            format!("The value of title must be at most {} characters!", TITLE_LENGTH_MAX),
        )),
        Some(_) => Ok(()),
    }
}

pub fn check_release_date(release_date: Option<NaiveDate>) -> Validation<NaiveDate> {
    let date = release_date.ok_or_else(|| {
        ConstraintViolation::MandatoryValue(
            "A value for the release date must be provided!".to_string(),
        )
    })?;
    let min = release_date_min();
    if date < min {
        return Err(ConstraintViolation::Range(format!(
            "The value of release date must be greater than or equal to {}!",
            min.format("%Y-%m-%d")
        )));
    }
    Ok(date)
}

/// Parses a release date typed by a user (`YYYY-MM-DD`) and checks its range
pub fn parse_release_date(text: &str) -> Validation<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return check_release_date(None);
    }
    if !iso_date_pattern().is_match(text) {
        return Err(ConstraintViolation::Pattern(format!(
            "The release date {} must have the form YYYY-MM-DD!",
            text
        )));
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
        ConstraintViolation::Range(format!("The release date {} is not a calendar date!", text))
    })?;
    check_release_date(Some(date))
}

/// The director is mandatory and must be a registered Director
pub fn check_director(director_id: Option<i64>, registries: &Registries) -> Validation<PersonId> {
    let raw = director_id.ok_or_else(|| {
        ConstraintViolation::MandatoryValue("A value for the director must be provided!".to_string())
    })?;
    let id = PersonId::new(raw)?;
    if !registries.directors.contains(&id) {
        return Err(ConstraintViolation::ReferentialIntegrity(format!(
            "There is no director record with person ID {}!",
            id
        )));
    }
    Ok(id)
}

/// An actor reference must be a registered Actor
pub fn check_actor(actor_id: i64, registries: &Registries) -> Validation<PersonId> {
    let id = PersonId::new(actor_id)?;
    if !registries.actors.contains(&id) {
        return Err(ConstraintViolation::ReferentialIntegrity(format!(
            "There is no actor record with person ID {}!",
            id
        )));
    }
    Ok(id)
}

pub fn check_category(code: i64) -> Validation<MovieCategory> {
    match code {
        1 => Ok(MovieCategory::TvSeriesEpisode),
        2 => Ok(MovieCategory::Biography),
        _ => Err(ConstraintViolation::Range(format!(
            "Invalid value for category: {}",
            code
        ))),
    }
}

pub fn check_tv_series_name(tv_series_name: Option<&str>, category: Option<MovieCategory>) -> Validation {
    let applies = category == Some(MovieCategory::TvSeriesEpisode);
    match tv_series_name.filter(|s| !s.is_empty()) {
        None if applies => Err(ConstraintViolation::MandatoryValue(
            "A TV series name must be provided for a TV series episode!".to_string(),
        )),
        Some(_) if !applies => Err(ConstraintViolation::Segment(
            "A TV series name must not be provided if the movie is not a TV series episode!"
                .to_string(),
        )),
        Some(name) if is_blank(name) => Err(ConstraintViolation::Range(
            "The TV series name must be a non-empty string!".to_string(),
        )),
        _ => Ok(()),
    }
}

pub fn check_episode_no(episode_no: Option<i64>, category: Option<MovieCategory>) -> Validation {
    let applies = category == Some(MovieCategory::TvSeriesEpisode);
    match episode_no {
        None if applies => Err(ConstraintViolation::MandatoryValue(
            "An episode number must be provided for a TV series episode!".to_string(),
        )),
        Some(_) if !applies => Err(ConstraintViolation::Segment(
            "An episode number must not be provided if the movie is not a TV series episode!"
                .to_string(),
        )),
        Some(n) if n < 1 || u32::try_from(n).is_err() => Err(ConstraintViolation::Range(
            "The episode number must be a positive integer!".to_string(),
        )),
        _ => Ok(()),
    }
}

pub fn check_about(about: Option<&str>, category: Option<MovieCategory>) -> Validation {
    let applies = category == Some(MovieCategory::Biography);
    match about.filter(|s| !s.is_empty()) {
        None if applies => Err(ConstraintViolation::MandatoryValue(
            "A biography movie record must have an 'about' field!".to_string(),
        )),
        Some(_) if !applies => Err(ConstraintViolation::Segment(
            "An 'about' field value must not be provided if the movie is not a biography!"
                .to_string(),
        )),
        Some(a) if is_blank(a) => Err(ConstraintViolation::Range(
            "The 'about' field value must be a non-empty string!".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Validates all Movie invariants against the current registries.
///
/// Used as the final gate before a staged movie is published.
pub fn validate_movie(movie: &Movie, registries: &Registries) -> Validation {
    check_title(Some(movie.title()))?;
    check_release_date(Some(movie.release_date()))?;
    if let Some(director) = movie.director() {
        check_director(Some(i64::from(director)), registries)?;
    }
    for actor in movie.actors() {
        check_actor(i64::from(*actor), registries)?;
    }
    if let Some(segment) = movie.segment() {
        let category = Some(segment.category());
        check_tv_series_name(segment.tv_series_name(), category)?;
        check_episode_no(segment.episode_no().map(i64::from), category)?;
        check_about(segment.about(), category)?;
    }
    Ok(())
}

// Movie invariants:
//
// 1. The id is a positive integer, unique among movies
// 2. The title is non-blank and at most 120 characters
// 3. The release date is on or after 1895-12-28
// 4. The director, when present, is a registered Director
// 5. Every actor is a registered Actor
// 6. Segment fields exist only for the movie's category, and all of them do
// 7. The category never changes once set, and is never unset
