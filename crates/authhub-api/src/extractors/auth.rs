//! `CurrentUser` extractor for handlers that need the authenticated user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use authhub_core::entity::User;
use authhub_core::error::AppError;

use crate::error::ApiError;
use crate::middleware::auth::credentials_from_headers;
use crate::state::AppState;

/// Extracted authenticated user available in handlers.
///
/// On guarded paths the auth middleware has already resolved the user into
/// request extensions; on excluded paths the extractor resolves the
/// credential material itself.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<User>() {
            return Ok(Self(user.clone()));
        }

        let credentials =
            credentials_from_headers(&parts.headers, &state.config.auth.session_cookie);

        if credentials.is_empty() {
            return Err(AppError::authentication("Authentication required").into());
        }

        state
            .authenticator
            .current_user(&credentials)
            .await
            .map(Self)
            .ok_or_else(|| {
                AppError::authorization("Credentials did not resolve to a user").into()
            })
    }
}
