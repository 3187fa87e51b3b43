// src/repositories/storage.rs
//
// Key-value persistence contract

use crate::error::AppResult;

/// String-keyed blob storage.
///
/// A key names one entity table; the value is that table serialized as a JSON
/// object. Reads of a key that was never written yield `None`.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the whole value stored under `key`
    fn write(&self, key: &str, value: &str) -> AppResult<()>;
}
