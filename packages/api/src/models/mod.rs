//! Data models for the application.

mod listing;
mod user;

pub use listing::{Brand, Job, JobType, UnknownJobType};
pub use user::{ProfileUpdate, SocialLinks, UserProfile, UserRecord, SOCIAL_PROVIDERS};
