//! # API crate: client-side core for the Big Green Bag job board
//!
//! Everything the web, desktop and mobile frontends call that is not markup:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Mock email + password accounts: [`SessionManager`], form validation, [`AuthError`] |
//! | [`listing`] | Search/filter/sort over jobs and brands, plus the built-in catalog |
//! | [`models`] | [`UserRecord`], [`UserProfile`], [`ProfileUpdate`], [`Job`], [`Brand`] |
//!
//! Persistence goes through [`store::KeyValueStore`]; this crate never picks a
//! backend itself.

pub mod auth;
pub mod listing;
pub mod models;

pub use auth::{validate_sign_in, validate_sign_up, AuthError, AuthState, SessionManager, SessionState};
pub use listing::sort::{sort_brands, sort_jobs, BrandSort, JobSort};
pub use listing::{Listing, ListingFilter};
pub use models::{Brand, Job, JobType, ProfileUpdate, UserProfile, UserRecord};

pub use store::BoardConfig;
