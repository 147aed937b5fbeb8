//! Response DTOs.

use serde::{Deserialize, Serialize};

/// GET /api/v1/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always "OK" while the service is up.
    pub status: String,
}

/// Plain message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// POST /api/v1/users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// The registered email.
    pub email: String,
    /// Confirmation message.
    pub message: String,
}

/// POST /api/v1/sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The logged-in email.
    pub email: String,
    /// Confirmation message.
    pub message: String,
}

/// GET /api/v1/profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// The authenticated user's email.
    pub email: String,
}

/// POST /api/v1/reset_password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetTokenResponse {
    /// The email the token was issued for.
    pub email: String,
    /// The issued reset token.
    pub reset_token: String,
}
