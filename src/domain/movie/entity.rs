use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use super::category::{MovieCategory, MovieSegment, SegmentFields};
use super::invariants::{
    check_about, check_actor, check_director, check_episode_no, check_movie_id_as_id,
    check_release_date, check_title, check_tv_series_name,
};
use crate::domain::{ConstraintViolation, MovieId, PersonId, Validation};
use crate::registry::Registries;

/// Proposed attribute values for a Movie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieSlots {
    pub movie_id: Option<i64>,
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub director_id: Option<i64>,
    pub actor_id_refs: Vec<i64>,
    pub category: Option<MovieCategory>,
    pub tv_series_name: Option<String>,
    pub episode_no: Option<i64>,
    pub about: Option<String>,
}

impl MovieSlots {
    pub fn new(
        movie_id: i64,
        title: impl Into<String>,
        release_date: NaiveDate,
        director_id: i64,
    ) -> Self {
        Self {
            movie_id: Some(movie_id),
            title: Some(title.into()),
            release_date: Some(release_date),
            director_id: Some(director_id),
            ..Self::default()
        }
    }

    pub fn with_actors(mut self, actor_id_refs: impl IntoIterator<Item = i64>) -> Self {
        self.actor_id_refs = actor_id_refs.into_iter().collect();
        self
    }

    pub fn tv_series_episode(mut self, tv_series_name: impl Into<String>, episode_no: i64) -> Self {
        self.category = Some(MovieCategory::TvSeriesEpisode);
        self.tv_series_name = Some(tv_series_name.into());
        self.episode_no = Some(episode_no);
        self
    }

    pub fn biography(mut self, about: impl Into<String>) -> Self {
        self.category = Some(MovieCategory::Biography);
        self.about = Some(about.into());
        self
    }
}

/// A movie with its director, cast and optional category segment.
///
/// People are referenced by identifier; the references are checked against
/// the registries at assignment time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    id: MovieId,
    title: String,
    release_date: NaiveDate,
    director: Option<PersonId>,
    actors: BTreeSet<PersonId>,
    segment: Option<MovieSegment>,
}

impl Movie {
    /// Create a new movie; the director is mandatory
    pub fn new(slots: MovieSlots, registries: &Registries) -> Validation<Self> {
        Self::build(slots, registries, true)
    }

    /// Rebuild a stored movie. The director may be missing because deleting a
    /// director clears the reference instead of deleting the movie.
    pub fn restore(slots: MovieSlots, registries: &Registries) -> Validation<Self> {
        Self::build(slots, registries, false)
    }

    fn build(slots: MovieSlots, registries: &Registries, require_director: bool) -> Validation<Self> {
        let id = check_movie_id_as_id(slots.movie_id, registries)?;
        check_title(slots.title.as_deref())?;
        let release_date = check_release_date(slots.release_date)?;
        let director = match slots.director_id {
            None if !require_director => None,
            director_id => Some(check_director(director_id, registries)?),
        };

        let mut movie = Self {
            id,
            title: slots.title.unwrap_or_default(),
            release_date,
            director,
            actors: BTreeSet::new(),
            segment: None,
        };
        for actor_id in slots.actor_id_refs {
            movie.add_actor(actor_id, registries)?;
        }

        let fields = SegmentFields {
            tv_series_name: slots.tv_series_name,
            episode_no: slots.episode_no,
            about: slots.about,
        };
        match slots.category {
            Some(category) => movie.set_category(category, fields)?,
            None => fields.check(None)?,
        }
        Ok(movie)
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn director(&self) -> Option<PersonId> {
        self.director
    }

    pub fn actors(&self) -> &BTreeSet<PersonId> {
        &self.actors
    }

    pub fn segment(&self) -> Option<&MovieSegment> {
        self.segment.as_ref()
    }

    pub fn category(&self) -> Option<MovieCategory> {
        self.segment.as_ref().map(MovieSegment::category)
    }

    pub fn tv_series_name(&self) -> Option<&str> {
        self.segment.as_ref().and_then(MovieSegment::tv_series_name)
    }

    pub fn episode_no(&self) -> Option<u32> {
        self.segment.as_ref().and_then(MovieSegment::episode_no)
    }

    pub fn about(&self) -> Option<&str> {
        self.segment.as_ref().and_then(MovieSegment::about)
    }

    pub fn set_title(&mut self, title: &str) -> Validation {
        check_title(Some(title))?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn set_release_date(&mut self, release_date: NaiveDate) -> Validation {
        self.release_date = check_release_date(Some(release_date))?;
        Ok(())
    }

    pub fn set_director(&mut self, director_id: i64, registries: &Registries) -> Validation {
        self.director = Some(check_director(Some(director_id), registries)?);
        Ok(())
    }

    /// Drop the director reference after the director was destroyed
    pub(crate) fn clear_director(&mut self) {
        self.director = None;
    }

    pub fn add_actor(&mut self, actor_id: i64, registries: &Registries) -> Validation {
        let id = check_actor(actor_id, registries)?;
        self.actors.insert(id);
        Ok(())
    }

    /// Removing an actor who is not in the cast is a no-op
    pub fn remove_actor(&mut self, actor_id: i64, registries: &Registries) -> Validation {
        let id = check_actor(actor_id, registries)?;
        self.actors.remove(&id);
        Ok(())
    }

    /// Drop an actor reference after the actor was destroyed
    pub(crate) fn detach_actor(&mut self, actor_id: PersonId) -> bool {
        self.actors.remove(&actor_id)
    }

    /// Categorize the movie. The category is frozen once set: assigning a
    /// different one fails, assigning the same one only updates the given fields.
    pub fn set_category(&mut self, category: MovieCategory, fields: SegmentFields) -> Validation {
        match self.category() {
            Some(current) if current != category => Err(ConstraintViolation::FrozenValue(
                "The category cannot be changed!".to_string(),
            )),
            Some(_) => self.set_segment_fields(fields),
            None => {
                self.segment = Some(MovieSegment::build(category, fields)?);
                Ok(())
            }
        }
    }

    /// A category can never be removed once assigned
    pub fn unset_category(&mut self) -> Validation {
        if self.segment.is_some() {
            return Err(ConstraintViolation::FrozenValue(
                "The movie category must not be unset!".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply each supplied segment field through its setter
    pub fn set_segment_fields(&mut self, fields: SegmentFields) -> Validation {
        if let Some(name) = fields.tv_series_name {
            self.set_tv_series_name(&name)?;
        }
        if let Some(episode_no) = fields.episode_no {
            self.set_episode_no(episode_no)?;
        }
        if let Some(about) = fields.about {
            self.set_about(&about)?;
        }
        Ok(())
    }

    pub fn set_tv_series_name(&mut self, name: &str) -> Validation {
        check_tv_series_name(Some(name), self.category())?;
        if let Some(MovieSegment::TvSeriesEpisode { tv_series_name, .. }) = &mut self.segment {
            *tv_series_name = name.to_string();
        }
        Ok(())
    }

    pub fn set_episode_no(&mut self, episode_no: i64) -> Validation {
        check_episode_no(Some(episode_no), self.category())?;
        if let Some(MovieSegment::TvSeriesEpisode { episode_no: current, .. }) = &mut self.segment {
            if let Ok(n) = u32::try_from(episode_no) {
                *current = n;
            }
        }
        Ok(())
    }

    pub fn set_about(&mut self, value: &str) -> Validation {
        check_about(Some(value), self.category())?;
        if let Some(MovieSegment::Biography { about }) = &mut self.segment {
            *about = value.to_string();
        }
        Ok(())
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Movie{{ movie ID: {}, title: {}, releaseDate: {}",
            self.id,
            self.title,
            self.release_date.format("%Y-%m-%d")
        )?;
        if let Some(director) = self.director {
            write!(f, ", director: {}", director)?;
        }
        let actors: Vec<String> = self.actors.iter().map(ToString::to_string).collect();
        write!(f, ", actors: {}", actors.join(","))?;
        match &self.segment {
            Some(MovieSegment::TvSeriesEpisode {
                tv_series_name,
                episode_no,
            }) => write!(
                f,
                ", [TV series episode] TV series name: {}, episode number: {}",
                tv_series_name, episode_no
            )?,
            Some(MovieSegment::Biography { about }) => write!(f, ", [Biography] about: {}", about)?,
            None => {}
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViolationKind;
    use crate::registry::test_support::registries_with_cast;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_movie() {
        let registries = registries_with_cast();
        let movie = Movie::new(
            MovieSlots::new(1, "Pulp Fiction", date(1994, 5, 12), 3).with_actors([3, 4, 5]),
            &registries,
        )
        .unwrap();
        assert_eq!(movie.director().map(PersonId::get), Some(3));
        assert_eq!(movie.actors().len(), 3);
        assert_eq!(movie.category(), None);
        assert_eq!(
            movie.to_string(),
            "Movie{ movie ID: 1, title: Pulp Fiction, releaseDate: 1994-05-12, director: 3, actors: 3,4,5}"
        );
    }

    #[test]
    fn test_unknown_director_fails() {
        let registries = registries_with_cast();
        let err = Movie::new(MovieSlots::new(1, "Stay", date(2005, 9, 24), 99), &registries)
            .unwrap_err();
        assert_eq!(err.kind(), ViolationKind::ReferentialIntegrity);
    }

    #[test]
    fn test_director_mandatory_on_create_but_not_on_restore() {
        let registries = registries_with_cast();
        let slots = MovieSlots {
            director_id: None,
            ..MovieSlots::new(1, "Stay", date(2005, 9, 24), 1)
        };
        let err = Movie::new(slots.clone(), &registries).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::MandatoryValue);
        let restored = Movie::restore(slots, &registries).unwrap();
        assert_eq!(restored.director(), None);
    }

    #[test]
    fn test_unknown_actor_fails() {
        let registries = registries_with_cast();
        let err = Movie::new(
            MovieSlots::new(1, "Stay", date(2005, 9, 24), 1).with_actors([4, 77]),
            &registries,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ViolationKind::ReferentialIntegrity);
    }

    #[test]
    fn test_tv_episode_movie() {
        let registries = registries_with_cast();
        let movie = Movie::new(
            MovieSlots::new(4, "2015", date(2019, 6, 30), 1).tv_series_episode("The Loudest Voice", 6),
            &registries,
        )
        .unwrap();
        assert_eq!(movie.category(), Some(MovieCategory::TvSeriesEpisode));
        assert_eq!(movie.tv_series_name(), Some("The Loudest Voice"));
        assert_eq!(movie.episode_no(), Some(6));
        assert_eq!(movie.about(), None);
    }

    #[test]
    fn test_segment_field_without_category_fails() {
        let registries = registries_with_cast();
        let slots = MovieSlots {
            about: Some("John Forbes Nash".to_string()),
            ..MovieSlots::new(5, "A Beautiful Mind", date(2001, 12, 21), 1)
        };
        let err = Movie::new(slots, &registries).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Segment);
    }

    #[test]
    fn test_category_is_frozen() {
        let registries = registries_with_cast();
        let mut movie = Movie::new(
            MovieSlots::new(5, "A Beautiful Mind", date(2001, 12, 21), 1).biography("John Forbes Nash"),
            &registries,
        )
        .unwrap();
        let before = movie.clone();

        let fields = SegmentFields {
            tv_series_name: Some("Numb3rs".to_string()),
            episode_no: Some(1),
            about: None,
        };
        let err = movie.set_category(MovieCategory::TvSeriesEpisode, fields).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::FrozenValue);
        assert_eq!(movie.unset_category().unwrap_err().kind(), ViolationKind::FrozenValue);
        assert_eq!(movie, before);
    }

    #[test]
    fn test_tv_series_name_rejected_outside_tv_segment() {
        let registries = registries_with_cast();
        let mut biography = Movie::new(
            MovieSlots::new(5, "A Beautiful Mind", date(2001, 12, 21), 1).biography("John Forbes Nash"),
            &registries,
        )
        .unwrap();
        assert!(biography.set_tv_series_name("Numb3rs").is_err());

        let mut plain = Movie::new(MovieSlots::new(6, "Stay", date(2005, 9, 24), 1), &registries)
            .unwrap();
        let err = plain.set_tv_series_name("Numb3rs").unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Segment);
        assert_eq!(plain.tv_series_name(), None);
    }

    #[test]
    fn test_categorize_uncategorized_movie() {
        let registries = registries_with_cast();
        let mut movie = Movie::new(MovieSlots::new(6, "Stay", date(2005, 9, 24), 1), &registries)
            .unwrap();
        let fields = SegmentFields {
            about: Some("Henry Letham".to_string()),
            ..SegmentFields::default()
        };
        movie.set_category(MovieCategory::Biography, fields).unwrap();
        assert_eq!(movie.about(), Some("Henry Letham"));
        movie.set_about("Sam Foster").unwrap();
        assert_eq!(movie.about(), Some("Sam Foster"));
    }

    #[test]
    fn test_remove_actor_not_in_cast_is_noop() {
        let registries = registries_with_cast();
        let mut movie = Movie::new(
            MovieSlots::new(1, "Pulp Fiction", date(1994, 5, 12), 3).with_actors([3, 4]),
            &registries,
        )
        .unwrap();
        movie.remove_actor(5, &registries).unwrap();
        assert_eq!(movie.actors().len(), 2);
        movie.remove_actor(4, &registries).unwrap();
        assert_eq!(movie.actors().len(), 1);
    }
}
