use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::store::LocalStore;

/// Load a JSON state value stored under `key`. `Ok(None)` if the key is absent.
pub fn try_load_state<T: DeserializeOwned>(
    store: &LocalStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    store
        .get(key)
        .map(|raw| serde_json::from_str(raw).map_err(StorageError::from))
        .transpose()
}

/// Load a JSON state value, falling back to `T::default()` when the key is
/// absent or its value no longer parses.
pub fn load_state<T: DeserializeOwned + Default>(store: &LocalStore, key: &str) -> T {
    match try_load_state(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding unreadable state");
            T::default()
        }
    }
}

/// Serialize `value` under `key` and write the store to disk.
pub fn save_state<T: Serialize>(
    store: &mut LocalStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set(key, json);
    store.save()
}
