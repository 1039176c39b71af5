//! # Filesystem-backed record store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each record
//! as one file on the local filesystem. It is used on desktop and mobile
//! platforms so the user directory and session survive app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── users.json         # the user directory
//! └── user.json          # the active session, absent when signed out
//! ```
//!
//! A key is used as the file stem as-is, so it may only contain ASCII
//! alphanumerics, `-` and `_`. Any other key is rejected with
//! [`StoreError::InvalidKey`] (reads return `None`), which keeps every record
//! inside the base directory and gives distinct keys distinct files.
//!
//! Namespaces are sanitised instead, replacing disallowed characters with
//! `_`, so `"a.b"` and `"a_b"` share a directory.
//!
//! ## Platform data directories
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/bigbag/` |
//! | Linux | `~/.local/share/bigbag/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\bigbag\` |

use std::path::{Path, PathBuf};

use tracing::error;

use crate::records::{KeyValueStore, StoreError};

/// Filesystem-backed KeyValueStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Create a store scoped to an optional namespace (`<base>/<namespace>/`).
    pub fn with_namespace(base: &Path, namespace: Option<&str>) -> Self {
        match namespace.filter(|ns| !ns.is_empty()) {
            Some(ns) => Self::new(base.join(sanitize(ns))),
            None => Self::new(base.to_path_buf()),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn record_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || !key.chars().all(is_stem_char) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}

fn is_stem_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if is_stem_char(c) { c } else { '_' })
        .collect()
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        std::fs::read(self.record_path(key).ok()?).ok()
    }

    async fn set(&self, key: &str, data: Vec<u8>) -> Result<(), StoreError> {
        let path = self.record_path(key)?;
        let write = std::fs::create_dir_all(&self.base).and_then(|()| std::fs::write(&path, data));
        write.map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to write record");
            StoreError::Unavailable(e.to_string())
        })
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.record_path(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Records;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bigbag_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = temp_dir("roundtrip");

        let records = Records::new(FileStore::new(dir.clone()));
        records
            .save("users", &vec!["ada@example.com".to_string()])
            .await
            .unwrap();

        // Re-open from same directory
        let reopened = Records::new(FileStore::new(dir.clone()));
        let users: Vec<String> = reopened.load("users").await.unwrap().unwrap();
        assert_eq!(users, vec!["ada@example.com".to_string()]);
        assert!(dir.join("users.json").exists());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_remove_missing_key() {
        let dir = temp_dir("remove");

        let store = FileStore::new(dir.clone());
        store.remove("user").await.unwrap();

        store.set("user", b"{}".to_vec()).await.unwrap();
        store.remove("user").await.unwrap();
        assert!(store.get("user").await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_record_paths() {
        let store = FileStore::new(PathBuf::from("/data"));
        assert_eq!(
            store.record_path("users").unwrap(),
            PathBuf::from("/data/users.json")
        );
        assert!(matches!(
            store.record_path("../etc/passwd"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(store.record_path("").is_err());

        let scoped = FileStore::with_namespace(Path::new("/data"), Some("user-1"));
        assert_eq!(scoped.base(), Path::new("/data/user-1"));

        let unscoped = FileStore::with_namespace(Path::new("/data"), Some(""));
        assert_eq!(unscoped.base(), Path::new("/data"));

        let sanitized = FileStore::with_namespace(Path::new("/data"), Some("../x"));
        assert_eq!(sanitized.base(), Path::new("/data/___x"));
    }

    #[tokio::test]
    async fn test_similar_keys_do_not_collide() {
        let dir = temp_dir("collide");
        let store = FileStore::new(dir.clone());

        store.set("a_b", b"1".to_vec()).await.unwrap();
        for key in ["a.b", "a/b"] {
            let err = store.set(key, b"2".to_vec()).await.unwrap_err();
            assert!(matches!(err, StoreError::InvalidKey(_)));
            assert!(store.get(key).await.is_none());
            assert!(store.remove(key).await.is_err());
        }
        assert_eq!(store.get("a_b").await, Some(b"1".to_vec()));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
