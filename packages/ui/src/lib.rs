//! This crate contains the shared UI state for the workspace: the auth
//! provider that owns the session and the activity log used for notifications.

mod platform_store;
pub use platform_store::{make_store, PlatformStore};

mod auth;
pub use auth::{use_auth, AuthHandle, AuthProvider};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogEntry, LogLevel};
