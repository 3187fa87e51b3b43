// src/registry/registries.rs
//
// The four per-type registries and the operations that span them

use serde::Serialize;

use super::Registry;
use crate::domain::{Actor, Director, Movie, MovieId, Person, PersonId, PersonKind};

/// All instance registries of a catalog.
///
/// Constructed once at startup and passed explicitly to every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registries {
    /// Plain people only; identities with a subtype role live in the subtype tables
    pub people: Registry<Person>,
    pub actors: Registry<Actor>,
    pub directors: Registry<Director>,
    pub movies: Registry<Movie>,
}

/// One entry of the merged person view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSummary {
    pub id: PersonId,
    pub name: String,
    pub kinds: Vec<PersonKind>,
}

impl PersonSummary {
    pub fn is_actor(&self) -> bool {
        self.kinds.contains(&PersonKind::Actor)
    }

    pub fn is_director(&self) -> bool {
        self.kinds.contains(&PersonKind::Director)
    }
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is known anywhere in the shared identity space
    pub fn has_identity(&self, id: PersonId) -> bool {
        self.people.contains(&id) || self.actors.contains(&id) || self.directors.contains(&id)
    }

    /// Whether the registry that owns identifiers of `kind` holds `id`.
    ///
    /// A plain Person owns the whole identity space.
    pub fn contains_person(&self, kind: PersonKind, id: PersonId) -> bool {
        match kind {
            PersonKind::Person => self.has_identity(id),
            PersonKind::Actor => self.actors.contains(&id),
            PersonKind::Director => self.directors.contains(&id),
        }
    }

    /// Concrete types under which `id` is registered
    pub fn kinds_of(&self, id: PersonId) -> Vec<PersonKind> {
        let mut kinds = Vec::new();
        if self.people.contains(&id) {
            kinds.push(PersonKind::Person);
        }
        kinds.extend(
            PersonKind::SUBTYPES
                .into_iter()
                .filter(|kind| self.contains_person(*kind, id)),
        );
        kinds
    }

    pub fn insert_person(&mut self, person: Person) -> Option<Person> {
        self.people.insert(person)
    }

    /// Register an actor. A plain Person with the same id becomes this actor.
    pub fn insert_actor(&mut self, actor: Actor) -> Option<Actor> {
        self.people.remove(&actor.id());
        self.actors.insert(actor)
    }

    /// Register a director. A plain Person with the same id becomes this director.
    pub fn insert_director(&mut self, director: Director) -> Option<Director> {
        self.people.remove(&director.id());
        self.directors.insert(director)
    }

    /// Remove `id` from the registry of `kind`, keeping movies consistent.
    ///
    /// Removing the last subtype role of an identity leaves it as a plain
    /// Person. Returns `None` when `kind` did not hold `id`, otherwise the
    /// movies whose references were adjusted.
    pub fn remove_role(&mut self, kind: PersonKind, id: PersonId) -> Option<Vec<MovieId>> {
        match kind {
            PersonKind::Person => self.people.remove(&id).map(|_| Vec::new()),
            PersonKind::Actor => self.actors.remove(&id).map(|actor| {
                self.retain_identity(actor.person());
                self.detach_actor(id)
            }),
            PersonKind::Director => self.directors.remove(&id).map(|director| {
                self.retain_identity(director.person());
                self.detach_director(id)
            }),
        }
    }

    fn retain_identity(&mut self, core: &Person) {
        if !self.has_identity(core.id()) {
            self.people.insert(core.clone());
        }
    }

    /// Clear the director reference of every movie directed by `id`
    pub fn detach_director(&mut self, id: PersonId) -> Vec<MovieId> {
        let mut touched = Vec::new();
        for movie in self.movies.values_mut() {
            if movie.director() == Some(id) {
                movie.clear_director();
                touched.push(movie.id());
            }
        }
        touched
    }

    /// Remove `id` from the cast of every movie
    pub fn detach_actor(&mut self, id: PersonId) -> Vec<MovieId> {
        self.movies
            .values_mut()
            .filter_map(|movie| movie.detach_actor(id).then(|| movie.id()))
            .collect()
    }

    /// Name of a person, looking in subtype tables first
    pub fn person_name(&self, id: PersonId) -> Option<&str> {
        self.actors
            .get(&id)
            .map(Actor::name)
            .or_else(|| self.directors.get(&id).map(Director::name))
            .or_else(|| self.people.get(&id).map(Person::name))
    }

    pub fn person_summary(&self, id: PersonId) -> Option<PersonSummary> {
        let name = self.person_name(id)?;
        Some(PersonSummary {
            id,
            name: name.to_string(),
            kinds: self.kinds_of(id),
        })
    }

    /// One summary per identity, ordered by id
    pub fn person_summaries(&self) -> Vec<PersonSummary> {
        let mut ids: Vec<PersonId> = self
            .people
            .ids()
            .chain(self.actors.ids())
            .chain(self.directors.ids())
            .collect();
        ids.sort();
        ids.dedup();
        ids.into_iter()
            .filter_map(|id| self.person_summary(id))
            .collect()
    }

    /// Only base-type entries, without any subtype role
    pub fn plain_people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn movies_directed_by(&self, id: PersonId) -> Vec<&Movie> {
        self.movies
            .values()
            .filter(|movie| movie.director() == Some(id))
            .collect()
    }

    pub fn movies_played_by(&self, id: PersonId) -> Vec<&Movie> {
        self.movies
            .values()
            .filter(|movie| movie.actors().contains(&id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.people.clear();
        self.actors.clear();
        self.directors.clear();
        self.movies.clear();
    }
}
