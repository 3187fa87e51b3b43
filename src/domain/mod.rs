// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod actor;
pub mod director;
pub mod identifier;
pub mod movie;
pub mod person;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Identifiers
pub use identifier::{MovieId, PersonId};

// Person Domain
pub use person::{
    check_name, check_name_matches_identity, check_person_id, check_person_id_as_id,
    check_person_id_as_reference, Person, PersonKind, PersonSlots,
};

// Actor Domain
pub use actor::{check_agent, Actor, ActorSlots};

// Director Domain
pub use director::{Director, DirectorSlots};

// Movie Domain
pub use movie::{
    check_about, check_actor, check_category, check_director, check_episode_no, check_movie_id,
    check_movie_id_as_id, check_release_date, check_title, check_tv_series_name,
    parse_release_date, validate_movie, Movie, MovieCategory, MovieSegment, MovieSlots,
    SegmentFields, release_date_min, TITLE_LENGTH_MAX,
};

// ============================================================================
// CONSTRAINT VIOLATIONS
// ============================================================================

use std::fmt;
use thiserror::Error;

/// Outcome of a failed attribute check.
///
/// Every setter and constructor returns one of these before committing a
/// mutation. The "no violation" outcome is `Ok` of [`Validation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    /// A required value was not supplied
    #[error("{0}")]
    MandatoryValue(String),

    /// Wrong type, out of bounds, or too long
    #[error("{0}")]
    Range(String),

    /// Identifier already taken in the type's own registry
    #[error("{0}")]
    Uniqueness(String),

    /// Reference to a record that does not exist
    #[error("{0}")]
    ReferentialIntegrity(String),

    /// Attempt to change or unset a value that is immutable once set
    #[error("{0}")]
    FrozenValue(String),

    /// String does not have the expected shape
    #[error("{0}")]
    Pattern(String),

    /// Field belongs to a category segment the movie is not in
    #[error("{0}")]
    Segment(String),
}

/// Discriminant of a [`ConstraintViolation`], without the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MandatoryValue,
    Range,
    Uniqueness,
    ReferentialIntegrity,
    FrozenValue,
    Pattern,
    Segment,
}

impl ConstraintViolation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            ConstraintViolation::MandatoryValue(_) => ViolationKind::MandatoryValue,
            ConstraintViolation::Range(_) => ViolationKind::Range,
            ConstraintViolation::Uniqueness(_) => ViolationKind::Uniqueness,
            ConstraintViolation::ReferentialIntegrity(_) => ViolationKind::ReferentialIntegrity,
            ConstraintViolation::FrozenValue(_) => ViolationKind::FrozenValue,
            ConstraintViolation::Pattern(_) => ViolationKind::Pattern,
            ConstraintViolation::Segment(_) => ViolationKind::Segment,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ConstraintViolation::MandatoryValue(m)
            | ConstraintViolation::Range(m)
            | ConstraintViolation::Uniqueness(m)
            | ConstraintViolation::ReferentialIntegrity(m)
            | ConstraintViolation::FrozenValue(m)
            | ConstraintViolation::Pattern(m)
            | ConstraintViolation::Segment(m) => m,
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViolationKind::MandatoryValue => "MandatoryValueConstraintViolation",
            ViolationKind::Range => "RangeConstraintViolation",
            ViolationKind::Uniqueness => "UniquenessConstraintViolation",
            ViolationKind::ReferentialIntegrity => "ReferentialIntegrityConstraintViolation",
            ViolationKind::FrozenValue => "FrozenValueConstraintViolation",
            ViolationKind::Pattern => "PatternConstraintViolation",
            ViolationKind::Segment => "SegmentConstraintViolation",
        };
        f.write_str(name)
    }
}

/// Result of an attribute check; `Ok` means no constraint is violated
pub type Validation<T = ()> = Result<T, ConstraintViolation>;

/// A string that is absent after trimming
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
