//! # Client configuration in `bigbag.toml`
//!
//! Defines the TOML configuration read by the client at startup (filename:
//! [`BoardConfig::filename`] = `"bigbag.toml"`). It names the record keys used
//! for persisted state and the few knobs the mock authentication exposes.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! users_key = "users"      # the user directory
//! session_key = "user"     # the active session
//! namespace = ""           # optional backend scope (empty = unscoped)
//!
//! [auth]
//! min_password_length = 8
//! id_prefix = "user-"
//! ```
//!
//! All structs derive or implement `Default`, so a missing or empty config file
//! is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `bigbag.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Record keys and scoping for the local store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key holding the full user directory.
    #[serde(default = "default_users_key")]
    pub users_key: String,
    /// Key holding the signed-in user, absent when signed out.
    #[serde(default = "default_session_key")]
    pub session_key: String,
    /// Optional scope passed to the store backend. Empty means unscoped.
    #[serde(default)]
    pub namespace: String,
}

fn default_users_key() -> String {
    "users".to_string()
}

fn default_session_key() -> String {
    "user".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_key: default_users_key(),
            session_key: default_session_key(),
            namespace: String::new(),
        }
    }
}

/// Mock authentication settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length accepted by sign-up validation.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    /// Prefix for generated user ids.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_min_password_length() -> usize {
    8
}

fn default_id_prefix() -> String {
    "user-".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
            id_prefix: default_id_prefix(),
        }
    }
}

impl BoardConfig {
    /// Builder method to scope storage to a namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.storage.namespace = namespace.into();
        self
    }

    /// The namespace, or `None` when storage is unscoped.
    pub fn namespace(&self) -> Option<&str> {
        Some(self.storage.namespace.as_str()).filter(|ns| !ns.is_empty())
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "bigbag.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
