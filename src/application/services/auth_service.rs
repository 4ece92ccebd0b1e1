//! Password login and server-side session management.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::AppError;
use serde_json::json;

/// Service authenticating the operator and tracking admin sessions.
///
/// Login compares the supplied password against the configured shared secret;
/// a match mints an opaque random token held server-side with an expiry.
/// Expired sessions validate exactly like absent ones and are removed lazily
/// when presented.
pub struct AuthService {
    admin_password: String,
    ttl: Duration,
    sessions: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `admin_password` - shared secret operators must supply at login
    /// - `ttl_seconds` - session lifetime from creation
    pub fn new(admin_password: String, ttl_seconds: u64) -> Self {
        Self {
            admin_password,
            ttl: Duration::seconds(ttl_seconds as i64),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Session lifetime in seconds, as configured.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Number of currently stored sessions, expired ones included.
    pub fn session_count(&self) -> usize {
        self.sessions.read().expect("session lock poisoned").len()
    }

    /// Verifies the password and establishes a session.
    ///
    /// Returns the opaque session token to be handed to the client as a
    /// cookie.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the password does not match the
    /// configured secret; no session is created in that case.
    pub fn login(&self, password: &str) -> Result<String, AppError> {
        if password != self.admin_password {
            return Err(AppError::unauthorized(
                "Wrong password",
                json!({"reason": "Password does not match the configured secret"}),
            ));
        }

        let token = generate_token();
        let expires_at = Utc::now() + self.ttl;

        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(token.clone(), expires_at);

        Ok(token)
    }

    /// Validates a presented session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or the
    /// session has passed its expiry. Expired sessions are removed.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let expired = {
            let sessions = self.sessions.read().expect("session lock poisoned");
            match sessions.get(token) {
                Some(expires_at) => Utc::now() >= *expires_at,
                None => {
                    return Err(AppError::unauthorized(
                        "Unauthorized",
                        json!({"reason": "Login required"}),
                    ));
                }
            }
        };

        if expired {
            self.sessions
                .write()
                .expect("session lock poisoned")
                .remove(token);
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Session expired"}),
            ));
        }

        Ok(())
    }

    /// Destroys a session immediately. Unknown tokens are ignored.
    pub fn logout(&self, token: &str) {
        self.sessions
            .write()
            .expect("session lock poisoned")
            .remove(token);
    }
}

/// Generates an opaque session token: 32 random bytes, hex-encoded.
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("test-password".to_string(), 3600)
    }

    #[test]
    fn test_login_success_creates_session() {
        let service = service();

        let token = service.login("test-password").unwrap();

        assert_eq!(token.len(), 64);
        assert_eq!(service.session_count(), 1);
        assert!(service.authenticate(&token).is_ok());
    }

    #[test]
    fn test_login_wrong_password() {
        let service = service();

        let result = service.login("wrong");

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
        assert_eq!(service.session_count(), 0);
    }

    #[test]
    fn test_authenticate_unknown_token() {
        let service = service();

        let result = service.authenticate("no-such-token");

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_expired_session_treated_as_absent() {
        let service = AuthService::new("test-password".to_string(), 0);

        let token = service.login("test-password").unwrap();

        let result = service.authenticate(&token);
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));

        // Lazy removal on presentation.
        assert_eq!(service.session_count(), 0);
    }

    #[test]
    fn test_logout_invalidates_immediately() {
        let service = service();

        let token = service.login("test-password").unwrap();
        service.logout(&token);

        assert!(service.authenticate(&token).is_err());
        assert_eq!(service.session_count(), 0);
    }

    #[test]
    fn test_logout_unknown_token_is_noop() {
        let service = service();

        service.logout("no-such-token");

        assert_eq!(service.session_count(), 0);
    }

    #[test]
    fn test_tokens_are_unique() {
        let service = service();

        let a = service.login("test-password").unwrap();
        let b = service.login("test-password").unwrap();

        assert_ne!(a, b);
        assert_eq!(service.session_count(), 2);
    }
}
