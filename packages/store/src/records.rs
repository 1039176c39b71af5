//! # Typed JSON records on an abstract key-value store
//!
//! Everything the client persists (the user directory and the active session)
//! goes through the [`KeyValueStore`] trait, so the same logic works against an
//! in-memory map (tests), the filesystem (desktop/mobile) or IndexedDB (web).
//!
//! ## [`KeyValueStore`] trait
//!
//! Three async methods over raw bytes: `get`, `set` and `remove`. Backend reads
//! never fail: a backend that cannot be read behaves as if the key were absent.
//! Writes report [`StoreError::Unavailable`] so callers can tell the user that
//! nothing was saved.
//!
//! ## [`Records`]
//!
//! A thin wrapper that (de)serialises values as JSON:
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`load`](Records::load) | Reads and decodes a record. Missing → `Ok(None)`, malformed → [`StoreError::Decode`]. |
//! | [`save`](Records::save) | Encodes and writes a record, replacing whatever was there. |
//! | [`delete`](Records::delete) | Removes a record. Removing a missing key is not an error. |
//!
//! There is no transaction support: a read-modify-write sequence is only safe
//! when callers are serialised, which holds for a single UI event loop.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors raised by stores and by [`Records`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("invalid record key `{0}`")]
    InvalidKey(String),
    #[error("failed to decode record `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode record `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Async trait for storing and retrieving byte blobs by string key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<Vec<u8>>>;
    fn set(
        &self,
        key: &str,
        data: Vec<u8>,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// JSON record access on top of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct Records<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Records<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying byte store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load and decode the record stored under `key`.
    ///
    /// A blob that does not decode as `T` is an error rather than `None`, so a
    /// read-modify-write caller never overwrites data it could not read.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.get(key).await else {
            return Ok(None);
        };
        serde_json::from_slice(&raw).map(Some).map_err(|source| {
            warn!(key, error = %source, "malformed record");
            StoreError::Decode {
                key: key.to_string(),
                source,
            }
        })
    }

    /// Encode `value` as JSON and store it under `key`.
    pub async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let data = serde_json::to_vec(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, data).await
    }

    /// Remove the record stored under `key`.
    pub async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store.remove(key).await
    }
}
