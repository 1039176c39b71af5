use store::StoreError;
use thiserror::Error;

/// Errors surfaced by authentication and profile operations.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email already in use")]
    EmailAlreadyInUse,
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("You must be signed in to do that")]
    NotAuthenticated,
    #[error("User not found")]
    UserNotFound,
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),
}
