//! The key-value contract and its typed JSON layer.

use crate::error::StorageError;
use serde::{de::DeserializeOwned, Serialize};

/// Durable string key-value storage.
///
/// This is the whole contract the stores rely on: `get` returns `None`
/// for an absent key, `set` overwrites. Implementations may fail at any
/// time; callers decide whether a failure is tolerable.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Typed JSON access on top of any [`KeyValueStore`].
pub trait StoreJsonExt: KeyValueStore {
    /// Read and deserialize the value stored under `key`.
    ///
    /// Returns `None` if the key is absent; a present-but-unparsable
    /// value is a [`StorageError::Serialization`].
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` as JSON and store it under `key`.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> StoreJsonExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_get_json_absent_key() {
        let store = MemoryStore::new();
        let value: Option<Vec<u32>> = store.get_json("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let store = MemoryStore::new();
        store.set_json("numbers", &vec![1u32, 2, 3]).unwrap();

        let value: Option<Vec<u32>> = store.get_json("numbers").unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_corrupt_value_is_a_serialization_error() {
        let store = MemoryStore::new();
        store.set("numbers", "{not json").unwrap();

        let result: Result<Option<Vec<u32>>, _> = store.get_json("numbers");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
