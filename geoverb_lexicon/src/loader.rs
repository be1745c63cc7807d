//! Tolerant source loading.
//!
//! Each of the four sources is independently optional: a missing file, a
//! parse failure, or an unexpected shape degrades to an empty collection
//! for that entity, and the rest of the snapshot still loads. Sources may
//! be a bare JSON array, an object wrapping the array under the entity's
//! conventional key, or an object with any array-valued key.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use geoverb_core::{Conjugation, Pronunciation, Sense, Verb};

use crate::store::RecordStore;

const VERBS_FILE: &str = "verbs.json";
const CONJUGATIONS_FILE: &str = "conjugations.json";
const SENSES_FILE: &str = "senses.json";
const PRONUNCIATIONS_FILE: &str = "pronunciations.json";

/// Unwrap a decoded source into its raw record list.
fn extract_records(value: Value, key: &str) -> Vec<Value> {
    match value {
        Value::Array(records) => records,
        Value::Object(mut map) => {
            if let Some(Value::Array(records)) = map.remove(key) {
                return records;
            }
            map.into_iter()
                .find_map(|(_, nested)| match nested {
                    Value::Array(records) => Some(records),
                    _ => None,
                })
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Decode a source value into records, skipping malformed entries.
pub fn decode_records<T: DeserializeOwned>(value: Value, key: &str) -> Vec<T> {
    let raw = extract_records(value, key);
    let mut records = Vec::with_capacity(raw.len());
    for entry in raw {
        match serde_json::from_value(entry) {
            Ok(record) => records.push(record),
            Err(e) => warn!("skipping malformed {key} record: {e}"),
        }
    }
    records
}

async fn read_source<T: DeserializeOwned>(dir: &Path, file: &str, key: &str) -> Vec<T> {
    let path = dir.join(file);
    let data = match tokio::fs::read_to_string(&path).await {
        Ok(data) => data,
        Err(e) => {
            warn!("failed to read {}: {e}", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_str::<Value>(&data) {
        Ok(value) => decode_records(value, key),
        Err(e) => {
            warn!("failed to parse {}: {e}", path.display());
            Vec::new()
        }
    }
}

/// Read the four conventional source files concurrently and build the
/// store. There is no ordering dependency among the reads; each one
/// fails safe to an empty collection.
pub async fn load_dir(dir: &Path) -> RecordStore {
    let (verbs, conjugations, senses, pronunciations) = tokio::join!(
        read_source::<Verb>(dir, VERBS_FILE, "verbs"),
        read_source::<Conjugation>(dir, CONJUGATIONS_FILE, "conjugations"),
        read_source::<Sense>(dir, SENSES_FILE, "senses"),
        read_source::<Pronunciation>(dir, PRONUNCIATIONS_FILE, "pronunciations"),
    );
    RecordStore::new(verbs, conjugations, senses, pronunciations)
}

/// Build the store from already-decoded source values, for callers that
/// own their own I/O.
#[must_use]
pub fn store_from_values(
    verbs: Value,
    conjugations: Value,
    senses: Value,
    pronunciations: Value,
) -> RecordStore {
    RecordStore::new(
        decode_records(verbs, "verbs"),
        decode_records(conjugations, "conjugations"),
        decode_records(senses, "senses"),
        decode_records(pronunciations, "pronunciations"),
    )
}
