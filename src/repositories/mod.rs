// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - One JSON blob per entity table, keyed by the table name

pub mod file_store;
pub mod memory_store;
pub mod records;
pub mod sqlite_store;
pub mod storage;
pub mod table;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use records::{ActorRecord, DirectorRecord, MovieRecord, PersonRecord};
pub use sqlite_store::SqliteStore;
pub use storage::KeyValueStore;
pub use table::{decode_records, load_table, save_table, Table};

#[cfg(test)]
pub use storage::MockKeyValueStore;
