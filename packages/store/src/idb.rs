//! # IndexedDB record store for the browser
//!
//! [`IdbStore`] is the [`KeyValueStore`] implementation used on the **web platform**.
//! It persists records into the browser's IndexedDB via the [`rexie`] crate,
//! taking the place `localStorage` would have in a plain JavaScript client.
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"bigbag"` (version 1) with one object store:
//!
//! | IndexedDB store | Key | Value |
//! |-----------------|-----|-------|
//! | `"records"` | record key (e.g. `"users"`, `"user"`) | `Vec<u8>` JSON bytes (serialised via `serde_wasm_bindgen`) |
//!
//! ## Connection management
//!
//! `IdbStore` only holds the database name and opens a fresh [`Rexie`]
//! connection on every operation. `Rexie` does not implement `Clone`, and the
//! browser caches IndexedDB connections internally.
//!
//! ## Error handling
//!
//! Reads swallow errors and return `None`, so an unavailable IndexedDB reads as
//! an empty store. Writes map failures to [`StoreError::Unavailable`].

use crate::records::{KeyValueStore, StoreError};
use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

const DEFAULT_DB_NAME: &str = "bigbag";
const DB_VERSION: u32 = 1;
const RECORDS_STORE: &str = "records";

fn unavailable(e: rexie::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

/// IndexedDB-backed KeyValueStore for web platform.
///
/// When a namespace is provided, the database is named `"bigbag-<namespace>"`.
#[derive(Clone, Debug)]
pub struct IdbStore {
    db_name: String,
}

impl Default for IdbStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdbStore {
    /// Create an unscoped store using the default `"bigbag"` database.
    pub fn new() -> Self {
        Self::with_namespace(None)
    }

    /// Create a store scoped to an optional namespace.
    pub fn with_namespace(namespace: Option<&str>) -> Self {
        let db_name = match namespace.filter(|ns| !ns.is_empty()) {
            Some(ns) => format!("{DEFAULT_DB_NAME}-{ns}"),
            None => DEFAULT_DB_NAME.to_string(),
        };
        Self { db_name }
    }

    async fn open_db(&self) -> Result<Rexie, rexie::Error> {
        Rexie::builder(&self.db_name)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(RECORDS_STORE))
            .build()
            .await
    }
}

impl KeyValueStore for IdbStore {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let db = self.open_db().await.ok()?;
        let tx = db
            .transaction(&[RECORDS_STORE], TransactionMode::ReadOnly)
            .ok()?;
        let store = tx.store(RECORDS_STORE).ok()?;

        let value = store.get(JsValue::from_str(key)).await.ok()??;
        serde_wasm_bindgen::from_value(value).ok()
    }

    async fn set(&self, key: &str, data: Vec<u8>) -> Result<(), StoreError> {
        let db = self.open_db().await.map_err(unavailable)?;
        let tx = db
            .transaction(&[RECORDS_STORE], TransactionMode::ReadWrite)
            .map_err(unavailable)?;
        let store = tx.store(RECORDS_STORE).map_err(unavailable)?;

        let value = serde_wasm_bindgen::to_value(&data)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        store
            .put(&value, Some(&JsValue::from_str(key)))
            .await
            .map_err(unavailable)?;
        tx.done().await.map(|_| ()).map_err(unavailable)
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let db = self.open_db().await.map_err(unavailable)?;
        let tx = db
            .transaction(&[RECORDS_STORE], TransactionMode::ReadWrite)
            .map_err(unavailable)?;
        let store = tx.store(RECORDS_STORE).map_err(unavailable)?;

        store
            .delete(JsValue::from_str(key))
            .await
            .map_err(unavailable)?;
        tx.done().await.map(|_| ()).map_err(unavailable)
    }
}
