// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and the catalog
// - Commands accept raw DTOs, return DTOs
// - Commands that change data save the catalog before returning
// - Commands NEVER contain business logic

pub mod catalog_commands;
pub mod movie_commands;
pub mod person_commands;

pub use catalog_commands::*;
pub use movie_commands::*;
pub use person_commands::*;

use crate::domain::{ConstraintViolation, MovieId, PersonId, Validation};

/// Parse a person identifier typed by the user
fn parse_person_id(text: &str) -> Validation<i64> {
    text.parse::<PersonId>().map(i64::from)
}

/// Parse a movie identifier typed by the user
fn parse_movie_id(text: &str) -> Validation<i64> {
    text.parse::<MovieId>().map(i64::from)
}

/// Parse an optional integer; empty text counts as absent
fn parse_optional_int(text: Option<&str>, message: &str) -> Validation<Option<i64>> {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        None => Ok(None),
        Some(t) => t
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ConstraintViolation::Range(message.to_string())),
    }
}

/// Empty text counts as absent
fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}
