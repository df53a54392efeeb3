//! Typed cache over a key-value store.

use serde::{de::DeserializeOwned, Serialize};

use crate::store::KeyValueStore;
use crate::CacheError;

/// Type-safe cache backed by any [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopfront_cache::{Cache, MemoryStore};
    ///
    /// let cache = Cache::new(MemoryStore::new());
    /// cache.set("greeting", &"hello").unwrap();
    /// let value: Option<String> = cache.get("greeting").unwrap();
    /// assert_eq!(value.as_deref(), Some("hello"));
    /// ```
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and a
    /// [`CacheError::SerializeError`] if the stored bytes do not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        count: u32,
    }

    #[test]
    fn test_cache_roundtrip() {
        let cache = Cache::new(MemoryStore::new());
        let entry = Entry {
            name: "tea".to_string(),
            count: 3,
        };

        cache.set("entry", &entry).unwrap();
        assert_eq!(cache.get::<Entry>("entry").unwrap(), Some(entry));
    }

    #[test]
    fn test_cache_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        assert_eq!(cache.get::<Entry>("missing").unwrap(), None);
    }

    #[test]
    fn test_cache_corrupt_value() {
        let store = MemoryStore::new();
        store.set("entry", b"{not json").unwrap();

        let cache = Cache::new(store);
        let err = cache.get::<Entry>("entry").unwrap_err();
        assert!(matches!(err, CacheError::SerializeError(_)));
    }
}
