// src/lib.rs
// moviedb - Constraint-checked movie and person catalog
//
// Architecture:
// - Domain-centric: every attribute check lives with its entity
// - Explicit: registries are values passed to every operation, no globals
// - All-or-nothing: updates are staged on a copy and published on success
// - Snapshot persistence: one JSON table per entity type in a key-value store

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod registry;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod config;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    // Validation
    ConstraintViolation,
    Validation,
    ViolationKind,
    // Identifiers
    MovieId,
    PersonId,
    // People
    Actor,
    ActorSlots,
    Director,
    DirectorSlots,
    Person,
    PersonKind,
    PersonSlots,
    // Movies
    Movie,
    MovieCategory,
    MovieSegment,
    MovieSlots,
    SegmentFields,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Registries
// ============================================================================

pub use registry::{PersonSummary, Registries, Registry};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

pub use repositories::{FileStore, KeyValueStore, MemoryStore, SqliteStore};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    ActorService,
    DirectorService,
    MovieService,
    PersonService,
    UpdateActorRequest,
    UpdateDirectorRequest,
    UpdateMovieRequest,
    UpdatePersonRequest,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{Catalog, CatalogStats, ErrorResponse, ErrorType};

pub use config::{CatalogConfig, ConfigError, StorageBackend, StorageConfig};
