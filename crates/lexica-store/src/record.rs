use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::storage::Storage;

pub const RECORD_VERSION: u32 = 1;

/// Versioned envelope for every persisted value. A version bump means the
/// old record is dropped on load instead of being misread.
#[derive(Serialize, Deserialize)]
pub struct Record<T> {
    pub version: u32,
    pub value: T,
}

/// Load a record, degrading to the default on any absence, parse failure or
/// version mismatch. Never errors.
pub fn load_or_default<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: Storage,
{
    let Some(raw) = storage.get(key) else {
        return T::default();
    };

    match serde_json::from_str::<Record<T>>(&raw) {
        Ok(record) if record.version == RECORD_VERSION => record.value,
        Ok(record) => {
            tracing::warn!(
                "{key}: unsupported record version {}, using defaults",
                record.version
            );
            T::default()
        }
        Err(e) => {
            tracing::warn!("{key}: malformed record ({e}), using defaults");
            T::default()
        }
    }
}

pub fn persist<T, S>(storage: &S, key: &str, value: &T) -> anyhow::Result<()>
where
    T: Serialize,
    S: Storage,
{
    let record = Record {
        version: RECORD_VERSION,
        value,
    };
    storage.set(key, &serde_json::to_string_pretty(&record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn round_trips_through_the_envelope() {
        let storage = MemoryStorage::new();
        persist(&storage, "k", &vec!["a".to_string(), "b".to_string()]).unwrap();

        let loaded: Vec<String> = load_or_default(&storage, "k");
        assert_eq!(loaded, vec!["a", "b"]);
    }

    #[test]
    fn absent_key_loads_default() {
        let storage = MemoryStorage::new();
        let loaded: Vec<String> = load_or_default(&storage, "missing");
        assert!(loaded.is_empty());
    }

    #[test]
    fn malformed_json_loads_default() {
        let storage = MemoryStorage::with_value("k", "not json {");
        let loaded: Vec<String> = load_or_default(&storage, "k");
        assert!(loaded.is_empty());
    }

    #[test]
    fn version_mismatch_loads_default() {
        let storage = MemoryStorage::with_value("k", r#"{"version":99,"value":["x"]}"#);
        let loaded: Vec<String> = load_or_default(&storage, "k");
        assert!(loaded.is_empty());
    }
}
