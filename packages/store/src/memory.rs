use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::records::{KeyValueStore, StoreError};

/// In-memory KeyValueStore for testing and as a fallback when nothing else is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.records.lock().ok()?.get(key).cloned()
    }

    async fn set(&self, key: &str, data: Vec<u8>) -> Result<(), StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?
            .insert(key.to_string(), data);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Records;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        email: String,
    }

    #[tokio::test]
    async fn test_save_and_load_record() {
        let records = Records::new(MemoryStore::new());

        // Initially empty
        assert!(records.load::<Vec<Entry>>("users").await.unwrap().is_none());

        let entries = vec![Entry {
            id: "user-1".to_string(),
            email: "ada@example.com".to_string(),
        }];
        records.save("users", &entries).await.unwrap();

        let loaded: Vec<Entry> = records.load("users").await.unwrap().unwrap();
        assert_eq!(loaded, entries);
    }

    #[tokio::test]
    async fn test_clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("user", b"{}".to_vec()).await.unwrap();
        assert_eq!(other.get("user").await, Some(b"{}".to_vec()));
    }

    #[tokio::test]
    async fn test_malformed_record_is_decode_error() {
        let store = MemoryStore::new();
        store.set("user", b"not json".to_vec()).await.unwrap();

        let records = Records::new(store.clone());
        let err = records.load::<Entry>("user").await.unwrap_err();
        assert!(matches!(err, StoreError::Decode { ref key, .. } if key == "user"));

        // A blob of the wrong shape is rejected too, and left in place
        store.set("user", b"{\"id\": \"user-1\"}".to_vec()).await.unwrap();
        assert!(records.load::<Entry>("user").await.is_err());
        assert!(store.get("user").await.is_some());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let records = Records::new(MemoryStore::new());
        records.save("user", &"ada").await.unwrap();

        records.delete("user").await.unwrap();
        assert!(records.load::<String>("user").await.unwrap().is_none());

        // Deleting again is fine
        records.delete("user").await.unwrap();
    }
}
