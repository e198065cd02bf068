//! Versioned encoding of persisted collections.
//!
//! Collections are written as `{"version": 1, "items": [...]}`. Reads accept
//! that envelope and the older bare-array layout; anything else is logged and
//! read as an empty collection. Items are decoded one by one, so a single
//! damaged entry is dropped without losing the rest.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u32,
    items: &'a [T],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored<T> {
    Versioned { version: u32, items: Vec<T> },
    Legacy(Vec<T>),
}

pub fn encode<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Envelope {
        version: SCHEMA_VERSION,
        items,
    })
}

/// Decodes the value stored under `key`; absent or invalid data yields an empty list.
pub fn decode<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let items = match serde_json::from_str::<Stored<Value>>(raw) {
        Ok(Stored::Versioned {
            version: SCHEMA_VERSION,
            items,
        }) => items,
        Ok(Stored::Versioned { version, .. }) => {
            warn!("Ignoring {}: unsupported schema version {}", key, version);
            return Vec::new();
        }
        Ok(Stored::Legacy(items)) => items,
        Err(e) => {
            warn!("Ignoring malformed data in {}: {}", key, e);
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Dropping malformed entry {} of {}: {}", index, key, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_round_trip() {
        let encoded = encode(&["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(encoded, r#"{"version":1,"items":["a","b"]}"#);
        assert_eq!(decode::<String>("k", Some(&encoded)), vec!["a", "b"]);
    }

    #[test]
    fn legacy_arrays_are_accepted() {
        assert_eq!(decode::<u32>("k", Some("[1,2,3]")), vec![1, 2, 3]);
    }

    #[test]
    fn invalid_data_reads_as_empty() {
        assert!(decode::<u32>("k", None).is_empty());
        assert!(decode::<u32>("k", Some("not json")).is_empty());
        assert!(decode::<u32>("k", Some(r#"{"version":1,"items":["x"]}"#)).is_empty());
        assert!(decode::<u32>("k", Some(r#"{"version":7,"items":[1]}"#)).is_empty());
        assert!(decode::<u32>("k", Some(r#"{"plants":[1]}"#)).is_empty());
    }

    #[test]
    fn damaged_entries_are_dropped_individually() {
        assert_eq!(
            decode::<u32>("k", Some(r#"{"version":1,"items":[1,"x",3]}"#)),
            vec![1, 3]
        );
        assert_eq!(decode::<u32>("k", Some(r#"[null,2]"#)), vec![2]);
    }
}
