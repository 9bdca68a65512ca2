//! Typed persistence for the resume aggregates.
//!
//! # Responsibility
//! - Map the Shared Profile, role collection and active role id onto their
//!   storage keys.
//! - Fall back to defaults on missing or unparsable values.
//!
//! # Invariants
//! - No schema validation beyond successful deserialization.
//! - Read failures are logged at `warn` and never surfaced.

use super::kv_repo::{KeyValueStore, StoreResult};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key of the Shared Profile.
pub const SHARED_PROFILE_KEY: &str = "intelliresume_sharedData";
/// Storage key of the ordered role collection.
pub const ROLES_KEY: &str = "intelliresume_roles";
/// Storage key of the active role identifier.
pub const ACTIVE_ROLE_ID_KEY: &str = "intelliresume_activeRoleId";

/// All keys owned by the resume state, in write order.
pub const ALL_KEYS: [&str; 3] = [SHARED_PROFILE_KEY, ROLES_KEY, ACTIVE_ROLE_ID_KEY];

/// Loads and deserializes `key`, or returns `default`.
///
/// - absent key → `default`
/// - unparsable value → `warn` log, `default`
/// - store read error → `warn` log, `default`
pub fn load_or_default<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(err) => {
            warn!("event=state_load module=repo status=error key={key} error_code=read_failed error={err}");
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("event=state_load module=repo status=error key={key} error_code=parse_failed error={err}");
            default
        }
    }
}

/// Serializes `value` as JSON and writes it under `key`.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(value)?;
    store.set(key, &encoded)
}

/// Loads the persisted active role identifier.
///
/// Accepts a JSON string, and also a bare identifier written without JSON
/// quoting. Anything else yields `None`.
pub fn load_active_role_id<S>(store: &S) -> Option<String>
where
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(ACTIVE_ROLE_ID_KEY) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!("event=state_load module=repo status=error key={ACTIVE_ROLE_ID_KEY} error_code=read_failed error={err}");
            return None;
        }
    };

    match serde_json::from_str::<Option<String>>(&raw) {
        Ok(id) => id,
        Err(_) if is_bare_identifier(&raw) => Some(raw),
        Err(err) => {
            warn!("event=state_load module=repo status=error key={ACTIVE_ROLE_ID_KEY} error_code=parse_failed error={err}");
            None
        }
    }
}

/// Removes every resume key from the store.
pub fn clear_all<S>(store: &S) -> StoreResult<()>
where
    S: KeyValueStore + ?Sized,
{
    for key in ALL_KEYS {
        store.remove(key)?;
    }
    Ok(())
}

fn is_bare_identifier(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

#[cfg(test)]
mod tests {
    use super::{
        clear_all, load_active_role_id, load_or_default, save_json, ACTIVE_ROLE_ID_KEY, ROLES_KEY,
        SHARED_PROFILE_KEY,
    };
    use crate::repo::kv_repo::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn missing_key_returns_default() {
        let store = MemoryKeyValueStore::new();
        let value: Vec<String> = load_or_default(&store, ROLES_KEY, vec!["d".to_string()]);
        assert_eq!(value, vec!["d".to_string()]);
    }

    #[test]
    fn malformed_value_returns_default() {
        let store = MemoryKeyValueStore::with_entries([(ROLES_KEY, "{not json")]);
        let value: Vec<u32> = load_or_default(&store, ROLES_KEY, vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn wrong_shape_returns_default() {
        let store = MemoryKeyValueStore::with_entries([(ROLES_KEY, r#"{"a":1}"#)]);
        let value: Vec<u32> = load_or_default(&store, ROLES_KEY, vec![]);
        assert!(value.is_empty());
    }

    #[test]
    fn saved_value_loads_unchanged() {
        let store = MemoryKeyValueStore::new();
        save_json(&store, SHARED_PROFILE_KEY, &vec![1, 2, 3]).unwrap();
        let value: Vec<u32> = load_or_default(&store, SHARED_PROFILE_KEY, vec![]);
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn active_role_id_accepts_json_and_bare_strings() {
        let store = MemoryKeyValueStore::with_entries([(ACTIVE_ROLE_ID_KEY, "\"role_9\"")]);
        assert_eq!(load_active_role_id(&store).as_deref(), Some("role_9"));

        store.set(ACTIVE_ROLE_ID_KEY, "role_1700000000000").unwrap();
        assert_eq!(
            load_active_role_id(&store).as_deref(),
            Some("role_1700000000000")
        );

        store.set(ACTIVE_ROLE_ID_KEY, "null").unwrap();
        assert_eq!(load_active_role_id(&store), None);

        store.set(ACTIVE_ROLE_ID_KEY, "{broken").unwrap();
        assert_eq!(load_active_role_id(&store), None);
    }

    #[test]
    fn clear_all_removes_every_key() {
        let store = MemoryKeyValueStore::with_entries([
            (SHARED_PROFILE_KEY, "{}"),
            (ROLES_KEY, "[]"),
            (ACTIVE_ROLE_ID_KEY, "\"x\""),
            ("unrelated", "1"),
        ]);
        clear_all(&store).unwrap();
        assert_eq!(store.raw(SHARED_PROFILE_KEY), None);
        assert_eq!(store.raw(ROLES_KEY), None);
        assert_eq!(store.raw(ACTIVE_ROLE_ID_KEY), None);
        assert_eq!(store.raw("unrelated").as_deref(), Some("1"));
    }
}
