//! # Session Authentication
//!
//! Every simulated user authenticates with HTTP Basic auth. The header is
//! computed once, when the user starts, and stored as goose session data so
//! each later transaction reuses the same value.
//!
//! ```text
//! Authorization: Basic base64("john@gmail.com:password")
//!              = Basic am9obkBnbWFpbC5jb206cGFzc3dvcmQ=
//! ```
//!
//! The backend decodes the header, splits it on `:` and keeps the first two
//! parts, so neither half of the pair may contain a `:`. Nothing here
//! checks that.

use base64::{engine::general_purpose, Engine as _};
use goose::prelude::GooseUser;
use std::fmt;

/// Header name carrying the session credentials.
pub const AUTHORIZATION: &str = "Authorization";

/// Username/password pair of the test account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps the password out of `{:?}` output and therefore out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// Encode `username:password` as a Basic-auth header value.
///
/// Total for any input: base64 accepts arbitrary bytes.
pub fn basic_auth_value(username: &str, password: &str) -> String {
    let encoded = general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}

/// Header mapping for a credential pair: `(AUTHORIZATION, "Basic ...")`.
pub fn basic_auth_header(credentials: &Credentials) -> (&'static str, String) {
    (
        AUTHORIZATION,
        basic_auth_value(&credentials.username, &credentials.password),
    )
}

/// Per-user state attached to a [`GooseUser`]. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    authorization: String,
}

impl Session {
    pub fn new(credentials: &Credentials) -> Self {
        let (_, authorization) = basic_auth_header(credentials);
        Self { authorization }
    }

    /// Value of the `Authorization` header for this session.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }
}

/// Compute and store the session header. Runs as the scenario's on-start
/// transaction, once per simulated user.
pub fn init_session(user: &mut GooseUser, credentials: &Credentials) {
    user.set_session_data(Session::new(credentials));
    tracing::debug!(username = %credentials.username, "session initialized");
}

/// Header value for `user`, initializing the session first if the on-start
/// hook has not run for it.
pub fn session_authorization(user: &mut GooseUser, credentials: &Credentials) -> String {
    if let Some(session) = user.get_session_data::<Session>() {
        return session.authorization().to_string();
    }
    init_session(user, credentials);
    Session::new(credentials).authorization
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_for_test_account() {
        let credentials = Credentials::new("john@gmail.com", "password");
        let (name, value) = basic_auth_header(&credentials);
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Basic am9obkBnbWFpbC5jb206cGFzc3dvcmQ=");
    }

    #[test]
    fn test_basic_auth_round_trips_through_decoder() {
        let value = basic_auth_value("a:b", "p@ss:word");
        let encoded = value.strip_prefix("Basic ").unwrap();
        let decoded = general_purpose::STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"a:b:p@ss:word");
    }

    #[test]
    fn test_basic_auth_empty_credentials() {
        // base64(":") = "Og=="
        assert_eq!(basic_auth_value("", ""), "Basic Og==");
    }

    #[test]
    fn test_session_matches_header() {
        let credentials = Credentials::new("john@gmail.com", "password");
        let session = Session::new(&credentials);
        assert_eq!(session.authorization(), basic_auth_header(&credentials).1);
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("john@gmail.com", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("john@gmail.com"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<REDACTED>"));
    }
}
