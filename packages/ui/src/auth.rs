//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] is the composition root for the session: it builds the
//! platform store and one [`SessionManager`], restores the session on mount
//! and provides an [`AuthHandle`] to everything below it. Components call
//! [`use_auth`] and get `None` when no provider is mounted.

use api::{
    validate_sign_in, validate_sign_up, AuthError, AuthState, ProfileUpdate, SessionManager,
    UserProfile,
};
use dioxus::prelude::*;
use store::BoardConfig;

use crate::activity_log::{log_activity, ActivityLog, LogLevel};
use crate::platform_store::{make_store, PlatformStore};

/// Handle to the session, shared through context.
///
/// `state` mirrors the manager after every operation so components re-render.
#[derive(Clone)]
pub struct AuthHandle {
    manager: SessionManager<PlatformStore>,
    state: Signal<AuthState>,
    log: Signal<ActivityLog>,
}

impl AuthHandle {
    /// Current snapshot; reading it subscribes the calling component.
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.read().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn config(&self) -> &BoardConfig {
        self.manager.config()
    }

    async fn restore(&self) {
        self.manager.restore().await;
        self.sync();
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let result = match validate_sign_in(email, password) {
            Ok(()) => {
                self.mark_loading();
                self.manager.sign_in(email, password).await
            }
            Err(e) => Err(e),
        };
        self.report(&result, |user| format!("Welcome back, {}!", user.display_name()));
        result
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserProfile, AuthError> {
        let result = match validate_sign_up(email, password, name, &self.config().auth) {
            Ok(()) => {
                self.mark_loading();
                self.manager.sign_up(email, password, name).await
            }
            Err(e) => Err(e),
        };
        self.report(&result, |_| "Your account has been successfully created.".to_string());
        result
    }

    pub async fn update_user(&self, update: ProfileUpdate) -> Result<UserProfile, AuthError> {
        self.mark_loading();
        let result = self.manager.update_user(update).await;
        self.report(&result, |_| "Your profile has been updated successfully.".to_string());
        result
    }

    pub async fn sign_out(&self) {
        self.manager.sign_out().await;
        self.sync();
        let mut log = self.log;
        log_activity(&mut log, LogLevel::Info, "You have been signed out.");
    }

    fn mark_loading(&self) {
        let mut state = self.state;
        state.write().loading = true;
    }

    fn sync(&self) {
        let mut state = self.state;
        state.set(self.manager.snapshot());
    }

    fn report(
        &self,
        result: &Result<UserProfile, AuthError>,
        success: impl FnOnce(&UserProfile) -> String,
    ) {
        self.sync();
        let mut log = self.log;
        match result {
            Ok(user) => log_activity(&mut log, LogLevel::Success, &success(user)),
            Err(e) => log_activity(&mut log, LogLevel::Error, &e.to_string()),
        }
    }
}

/// Get the session handle, or `None` outside an [`AuthProvider`].
pub fn use_auth() -> Option<AuthHandle> {
    try_use_context::<AuthHandle>()
}

/// Provider component that owns the session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(#[props(default)] config: BoardConfig, children: Element) -> Element {
    let state = use_signal(AuthState::default);
    let log = use_signal(ActivityLog::default);
    let handle = use_hook(move || AuthHandle {
        manager: SessionManager::new(make_store(&config), config),
        state,
        log,
    });

    // Restore the persisted session on mount
    let restoring = handle.clone();
    let _ = use_resource(move || {
        let handle = restoring.clone();
        async move { handle.restore().await }
    });

    use_context_provider(|| log);
    use_context_provider(|| handle);

    rsx! {
        {children}
    }
}
