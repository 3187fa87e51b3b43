// src/repositories/table.rs
//
// Whole-table load and save on top of a KeyValueStore

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::storage::KeyValueStore;
use crate::error::AppResult;

/// A decoded table: record key to raw record value
pub type Table = Map<String, Value>;

/// Read the table stored under `key`.
///
/// A missing key is an empty table. So is a blob that is not a JSON object;
/// that case is logged and the caller continues with nothing loaded. Errors
/// from the store itself propagate.
pub fn load_table(store: &dyn KeyValueStore, key: &str) -> AppResult<Table> {
    let Some(blob) = store.read(key)? else {
        return Ok(Table::new());
    };

    match serde_json::from_str::<Value>(&blob) {
        Ok(Value::Object(table)) => Ok(table),
        Ok(other) => {
            log::warn!("Table {} is not a JSON object (found {}), ignoring it", key, type_name(&other));
            Ok(Table::new())
        }
        Err(e) => {
            log::warn!("Error when reading table {}: {}", key, e);
            Ok(Table::new())
        }
    }
}

/// Deserialize every record of `table`, skipping the ones that do not parse
pub fn decode_records<R: DeserializeOwned>(key: &str, table: Table) -> Vec<(String, R)> {
    table
        .into_iter()
        .filter_map(|(record_key, value)| match serde_json::from_value::<R>(value) {
            Ok(record) => Some((record_key, record)),
            Err(e) => {
                log::warn!("Skipping malformed record {} in table {}: {}", record_key, key, e);
                None
            }
        })
        .collect()
}

/// Serialize `records` as one JSON object and store it under `key`.
///
/// Returns the number of records written.
pub fn save_table<R, I>(store: &dyn KeyValueStore, key: &str, records: I) -> AppResult<usize>
where
    R: Serialize,
    I: IntoIterator<Item = (String, R)>,
{
    let table: BTreeMap<String, R> = records.into_iter().collect();
    let blob = serde_json::to_string(&table)?;
    store.write(key, &blob)?;
    Ok(table.len())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
