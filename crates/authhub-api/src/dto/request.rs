//! Request DTOs.

use serde::Deserialize;
use validator::Validate;

/// POST /api/v1/users
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email to register under.
    #[validate(email)]
    pub email: String,
    /// Plaintext password; policy is enforced by the account service.
    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /api/v1/sessions
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Registered email.
    #[validate(length(min = 1))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /api/v1/reset_password
#[derive(Debug, Deserialize, Validate)]
pub struct ResetTokenRequest {
    /// Email to issue a reset token for.
    #[validate(email)]
    pub email: String,
}

/// PUT /api/v1/reset_password
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    /// Email the token was issued for.
    #[validate(email)]
    pub email: String,
    /// The issued reset token.
    #[validate(length(min = 1))]
    pub reset_token: String,
    /// Replacement password.
    #[validate(length(min = 1))]
    pub new_password: String,
}
