//! DTOs for login and logout.

use serde::{Deserialize, Serialize};

/// Login request carrying the shared admin secret.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Acknowledgement for successful login/logout.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
}
