//! Lightweight input validation helpers. Presence checks only.

use serde_json::{Map, Value};
use tracing::warn;

use crate::{DirectoryError, UserRecord};

/// Keys every user input mapping must carry.
pub const REQUIRED_KEYS: [&str; 2] = ["name", "email"];

/// True when `data` is non-empty and has both `name` and `email` keys.
/// Values are not inspected.
pub fn validate_input(data: &Map<String, Value>) -> bool {
    !data.is_empty() && REQUIRED_KEYS.iter().all(|k| data.contains_key(*k))
}

/// Like [`validate_input`] for an arbitrary JSON value; `null` and
/// non-objects are rejected.
pub fn validate_value(value: &Value) -> bool {
    match value {
        Value::Object(map) => validate_input(map),
        _ => false,
    }
}

/// Convert a mapping into a [`UserRecord`], rejecting unknown keys and a
/// missing `id` or `name`. A missing `email` becomes empty.
pub fn record_from_mapping(data: &Map<String, Value>) -> Result<UserRecord, DirectoryError> {
    if data.is_empty() {
        return Err(DirectoryError::InvalidInput("empty mapping".into()));
    }
    serde_json::from_value(Value::Object(data.clone())).map_err(|e| {
        warn!(error = %e, "rejected user mapping");
        DirectoryError::Decode(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn empty_mapping_is_invalid() {
        assert!(!validate_input(&Map::new()));
    }

    #[test]
    fn missing_email_is_invalid() {
        assert!(!validate_input(&map(json!({"name": "a"}))));
        assert!(!validate_input(&map(json!({"email": "b"}))));
    }

    #[test]
    fn name_and_email_present_is_valid() {
        assert!(validate_input(&map(json!({"name": "a", "email": "b"}))));
    }

    #[test]
    fn values_are_not_inspected() {
        assert!(validate_input(&map(json!({"name": null, "email": 42, "extra": true}))));
    }

    #[test]
    fn absent_and_non_objects_are_invalid() {
        assert!(!validate_value(&Value::Null));
        assert!(!validate_value(&json!(["name", "email"])));
        assert!(!validate_value(&json!("name")));
        assert!(validate_value(&json!({"name": "a", "email": "b"})));
    }

    #[test]
    fn mapping_converts_to_record() {
        let r = record_from_mapping(&map(json!({"id": "u1", "name": "A", "email": "a@x"}))).unwrap();
        assert_eq!(r, UserRecord::new("u1", "A", "a@x"));
    }

    #[test]
    fn mapping_without_email_defaults() {
        let r = record_from_mapping(&map(json!({"id": "u1", "name": "A"}))).unwrap();
        assert_eq!(r.email, "");
    }

    #[test]
    fn mapping_rejects_extra_and_missing_keys() {
        let extra = record_from_mapping(&map(json!({"id": "u1", "name": "A", "age": 3})));
        assert!(matches!(extra, Err(DirectoryError::Decode(_))));

        let missing_id = record_from_mapping(&map(json!({"name": "A", "email": "a@x"})));
        assert!(matches!(missing_id, Err(DirectoryError::Decode(_))));

        let empty = record_from_mapping(&Map::new());
        assert!(matches!(empty, Err(DirectoryError::InvalidInput(_))));
    }
}
