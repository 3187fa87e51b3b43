// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above services and registries
// - Provides the boundary between the CLI and the domain
// - Translates between DTOs and slot records / update requests

pub mod catalog;
pub mod commands;
pub mod dto;
pub mod error_handling;
mod test_data;

pub use catalog::{open_store, Catalog, CatalogStats};
pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
