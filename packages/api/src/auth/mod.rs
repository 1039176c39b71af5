//! Mock email + password authentication backed by the local record store.

mod error;
mod session;
mod validation;

pub use error::AuthError;
pub use session::{AuthState, SessionManager, SessionState};
pub use validation::{validate_sign_in, validate_sign_up};
