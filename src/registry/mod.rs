// src/registry/mod.rs
//
// In-memory instance registries
//
// RULES:
// - One registry per concrete type, keyed by identifier
// - Registries are plain values owned by the caller, never global
// - Person, Actor and Director tables are joined by identifier into one
//   identity space
// - Registries do not validate; entities are validated before insertion

pub mod registries;

#[cfg(test)]
pub(crate) mod test_support;

pub use registries::{PersonSummary, Registries};

use std::collections::BTreeMap;

use crate::domain::{Actor, Director, Movie, MovieId, Person, PersonId};

/// An entity that is stored under its own identifier
pub trait Identified {
    type Id: Ord + Copy;

    fn identifier(&self) -> Self::Id;
}

impl Identified for Person {
    type Id = PersonId;

    fn identifier(&self) -> PersonId {
        self.id()
    }
}

impl Identified for Actor {
    type Id = PersonId;

    fn identifier(&self) -> PersonId {
        self.id()
    }
}

impl Identified for Director {
    type Id = PersonId;

    fn identifier(&self) -> PersonId {
        self.id()
    }
}

impl Identified for Movie {
    type Id = MovieId;

    fn identifier(&self) -> MovieId {
        self.id()
    }
}

/// Mapping from identifier to live instance for one entity type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<T: Identified> {
    instances: BTreeMap<T::Id, T>,
}

impl<T: Identified> Default for Registry<T> {
    fn default() -> Self {
        Self {
            instances: BTreeMap::new(),
        }
    }
}

impl<T: Identified> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the instance stored under its identifier
    pub fn insert(&mut self, instance: T) -> Option<T> {
        self.instances.insert(instance.identifier(), instance)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.instances.get(id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.instances.get_mut(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.instances.contains_key(id)
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.instances.remove(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = T::Id> + '_ {
        self.instances.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.instances.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.instances.values_mut()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }
}
