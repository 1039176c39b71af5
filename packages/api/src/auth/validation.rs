//! Form checks run before calling into [`SessionManager`](super::SessionManager).

use store::AuthConfig;

use super::AuthError;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check the sign-in form.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), AuthError> {
    if is_blank(email) || is_blank(password) {
        return Err(AuthError::MissingFields);
    }
    Ok(())
}

/// Check the sign-up form.
pub fn validate_sign_up(
    email: &str,
    password: &str,
    name: &str,
    config: &AuthConfig,
) -> Result<(), AuthError> {
    if is_blank(email) || is_blank(password) || is_blank(name) {
        return Err(AuthError::MissingFields);
    }
    if password.chars().count() < config.min_password_length {
        return Err(AuthError::PasswordTooShort {
            min: config.min_password_length,
        });
    }
    Ok(())
}
