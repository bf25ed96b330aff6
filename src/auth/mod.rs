pub mod password;
pub mod provider;
pub mod sessions;
pub mod token;

pub use provider::{AuthError, AuthEvent, IdentityProvider, User};

/// Cookie holding the raw session token.
pub const SESSION_COOKIE: &str = "session";
