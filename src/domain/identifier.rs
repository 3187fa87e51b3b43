// src/domain/identifier.rs
//
// Positive integer identifiers for people and movies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ConstraintViolation, Validation};

/// Validates that a raw value is a positive integer that fits an identifier
fn positive_u32(raw: i64, message: &str) -> Validation<u32> {
    if raw < 1 {
        return Err(ConstraintViolation::Range(message.to_string()));
    }
    u32::try_from(raw).map_err(|_| ConstraintViolation::Range(message.to_string()))
}

/// Parses user input: empty text is a missing value, anything else must be an integer
fn parse_integer(text: &str, missing: &str, malformed: &str) -> Validation<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConstraintViolation::MandatoryValue(missing.to_string()));
    }
    text.parse::<i64>()
        .map_err(|_| ConstraintViolation::Range(malformed.to_string()))
}

/// Identifier shared by Person, Actor and Director
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u32);

impl PersonId {
    pub fn new(raw: i64) -> Validation<Self> {
        positive_u32(raw, "The person ID must be a positive integer!").map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for PersonId {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = parse_integer(
            s,
            "A positive integer value for the person ID is required!",
            "The person ID must be a positive integer!",
        )?;
        Self::new(raw)
    }
}

impl From<PersonId> for i64 {
    fn from(id: PersonId) -> Self {
        i64::from(id.0)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a Movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u32);

impl MovieId {
    pub fn new(raw: i64) -> Validation<Self> {
        positive_u32(raw, "The value of movie ID must be a positive integer!").map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for MovieId {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = parse_integer(
            s,
            "A value for the movie ID must be provided!",
            "The value of movie ID must be an integer!",
        )?;
        Self::new(raw)
    }
}

impl From<MovieId> for i64 {
    fn from(id: MovieId) -> Self {
        i64::from(id.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
