//! # Session manager for the signed-in user
//!
//! [`SessionManager`] owns the current session and mirrors it to a
//! [`KeyValueStore`] under two keys (names come from [`StorageConfig`]):
//!
//! | Key | Contents |
//! |-----|----------|
//! | `users` | JSON list of every [`UserRecord`], passwords included |
//! | `user` | JSON [`UserProfile`] of the signed-in user, absent when signed out |
//!
//! ## States
//!
//! ```text
//! Unknown ──restore()──▶ Anonymous ⇄ Authenticated(user)
//! ```
//!
//! `Unknown` lasts until [`restore`](SessionManager::restore) has run, and the
//! manager reports itself as loading for that whole window so the UI can hold
//! back any signed-in/signed-out decision.
//!
//! ## Operations
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`restore`](SessionManager::restore) | Loads the `user` key. Missing or malformed → `Anonymous`. Only leaves `Unknown`. |
//! | [`sign_in`](SessionManager::sign_in) | Exact email + password match against the directory. |
//! | [`sign_up`](SessionManager::sign_up) | Appends a new record, rejecting duplicate emails, then signs in. Undone if the session cannot be saved. |
//! | [`update_user`](SessionManager::update_user) | Shallow-merges a [`ProfileUpdate`] into the directory entry and session. |
//! | [`sign_out`](SessionManager::sign_out) | Removes the `user` key. Idempotent. |
//!
//! Emails are compared exactly, including case.
//!
//! A `users` blob that does not decode is never written over. Sign-in treats
//! it as an empty directory; sign-up and profile updates fail with
//! [`AuthError::StorageUnavailable`] and leave it as it was.
//!
//! Directory mutations read the whole list, change it and write it back. There
//! is no protection against concurrent writers; the manager expects user
//! actions to be serialised by the UI event loop.
//!
//! Clones of a manager share the same session state.
//!
//! [`StorageConfig`]: store::StorageConfig

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use store::{BoardConfig, KeyValueStore, Records};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::AuthError;
use crate::models::{ProfileUpdate, UserProfile, UserRecord};

/// Where the session state machine currently is.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Restore has not finished yet.
    #[default]
    Unknown,
    Anonymous,
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
    /// Message of the last failed operation.
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Default)]
struct Inner {
    session: SessionState,
    busy: bool,
    error: Option<String>,
}

/// Sign-in, sign-up, sign-out and profile updates over a local user directory.
#[derive(Clone, Debug)]
pub struct SessionManager<S: KeyValueStore> {
    records: Records<S>,
    config: BoardConfig,
    inner: Arc<Mutex<Inner>>,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(store: S, config: BoardConfig) -> Self {
        Self {
            records: Records::new(store),
            config,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> SessionState {
        self.inner().session.clone()
    }

    /// The signed-in user, without password.
    pub fn user(&self) -> Option<UserProfile> {
        self.inner().session.user().cloned()
    }

    /// True until the session has been restored, and while an operation runs.
    pub fn is_loading(&self) -> bool {
        let inner = self.inner();
        inner.busy || inner.session == SessionState::Unknown
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner().session.user().is_some()
    }

    /// Message of the last failed operation, cleared when the next one starts.
    pub fn error(&self) -> Option<String> {
        self.inner().error.clone()
    }

    pub fn snapshot(&self) -> AuthState {
        let inner = self.inner();
        AuthState {
            user: inner.session.user().cloned(),
            loading: inner.busy || inner.session == SessionState::Unknown,
            error: inner.error.clone(),
        }
    }

    /// Load the persisted session. Runs once at startup.
    ///
    /// If another operation has already settled the session while the read was
    /// pending, that state wins and is returned unchanged.
    pub async fn restore(&self) -> SessionState {
        let stored = self
            .records
            .load::<UserProfile>(&self.config.storage.session_key)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "discarding unreadable session");
                None
            });
        let restored = match stored {
            Some(user) => {
                debug!(user_id = %user.id, "restored session");
                SessionState::Authenticated(user)
            }
            None => SessionState::Anonymous,
        };

        let mut inner = self.inner();
        if inner.session == SessionState::Unknown {
            inner.session = restored;
        } else {
            debug!("session settled before restore finished");
        }
        inner.session.clone()
    }

    /// Every registered user.
    ///
    /// A missing directory is empty. One that does not decode is an error.
    pub async fn directory(&self) -> Result<Vec<UserRecord>, AuthError> {
        Ok(self
            .records
            .load::<Vec<UserRecord>>(&self.config.storage.users_key)
            .await?
            .unwrap_or_default())
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        self.begin();
        let result = self.try_sign_in(email, password).await;
        self.finish("sign in", result)
    }

    async fn try_sign_in(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let users = self.directory().await.unwrap_or_else(|e| {
            warn!(error = %e, "user directory unreadable, no accounts to match");
            Vec::new()
        });
        let record = users
            .into_iter()
            .find(|u| u.profile.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;
        let user = self.open_session(record.into_profile()).await?;
        info!(user_id = %user.id, "signed in");
        Ok(user)
    }

    /// Register a new account and sign it in.
    ///
    /// If the session cannot be saved, the directory is put back as it was so
    /// the same email can be retried.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserProfile, AuthError> {
        self.begin();
        let result = self.try_sign_up(email, password, name).await;
        self.finish("sign up", result)
    }

    async fn try_sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserProfile, AuthError> {
        let mut users = self.directory().await?;
        if users.iter().any(|u| u.profile.email == email) {
            return Err(AuthError::EmailAlreadyInUse);
        }

        let record = UserRecord::new(self.new_user_id(), email, password, name, Utc::now());
        users.push(record.clone());
        self.records
            .save(&self.config.storage.users_key, &users)
            .await?;

        match self.open_session(record.into_profile()).await {
            Ok(user) => {
                info!(user_id = %user.id, "registered new user");
                Ok(user)
            }
            Err(e) => {
                users.pop();
                if let Err(rollback) = self
                    .records
                    .save(&self.config.storage.users_key, &users)
                    .await
                {
                    warn!(error = %rollback, "failed to roll back new account");
                }
                Err(e)
            }
        }
    }

    /// Merge `update` into the signed-in user's directory entry and session.
    pub async fn update_user(&self, update: ProfileUpdate) -> Result<UserProfile, AuthError> {
        self.begin();
        let result = self.try_update_user(&update).await;
        self.finish("update profile", result)
    }

    async fn try_update_user(&self, update: &ProfileUpdate) -> Result<UserProfile, AuthError> {
        let current = self.user().ok_or(AuthError::NotAuthenticated)?;
        if current.id != update.id {
            return Err(AuthError::NotAuthenticated);
        }

        let mut users = self.directory().await?;
        if let Some(email) = update.new_email() {
            if users
                .iter()
                .any(|u| u.profile.id != update.id && u.profile.email == email)
            {
                return Err(AuthError::EmailAlreadyInUse);
            }
        }

        let record = users
            .iter_mut()
            .find(|u| u.profile.id == update.id)
            .ok_or(AuthError::UserNotFound)?;
        update.apply_to(&mut record.profile);
        let merged = record.profile.clone();

        self.records
            .save(&self.config.storage.users_key, &users)
            .await?;
        let user = self.open_session(merged).await?;
        debug!(user_id = %user.id, "profile updated");
        Ok(user)
    }

    pub async fn sign_out(&self) {
        if let Err(e) = self.records.delete(&self.config.storage.session_key).await {
            warn!(error = %e, "failed to clear persisted session");
        }
        self.inner().session = SessionState::Anonymous;
        info!("signed out");
    }

    async fn open_session(&self, user: UserProfile) -> Result<UserProfile, AuthError> {
        self.records
            .save(&self.config.storage.session_key, &user)
            .await?;
        self.inner().session = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    fn new_user_id(&self) -> String {
        format!("{}{}", self.config.auth.id_prefix, Uuid::new_v4())
    }

    fn begin(&self) {
        let mut inner = self.inner();
        inner.busy = true;
        inner.error = None;
    }

    fn finish<T>(&self, action: &str, result: Result<T, AuthError>) -> Result<T, AuthError> {
        let mut inner = self.inner();
        inner.busy = false;
        if let Err(e) = &result {
            warn!(action, error = %e, "auth operation failed");
            inner.error = Some(e.to_string());
        }
        result
    }
}
