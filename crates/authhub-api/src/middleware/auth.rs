//! Authentication guard middleware.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use authhub_auth::authenticator::Credentials;
use authhub_core::entity::User;
use authhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Distills a request's headers into framework-free credential material.
pub fn credentials_from_headers(headers: &HeaderMap, cookie_name: &str) -> Credentials {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let session_cookie = CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|c| c.value().to_string());

    Credentials {
        authorization,
        session_cookie,
    }
}

/// Rejects unauthenticated requests to guarded paths.
///
/// Excluded paths pass through untouched. For guarded paths: no credential
/// material at all is 401, material that fails to resolve to a user is 403.
/// The resolved user is inserted into request extensions for handlers.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.authenticator.requires_auth(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let credentials =
        credentials_from_headers(request.headers(), &state.config.auth.session_cookie);

    if credentials.is_empty() {
        return Err(AppError::authentication("Authentication required").into());
    }

    let user: User = state
        .authenticator
        .current_user(&credentials)
        .await
        .ok_or_else(|| AppError::authorization("Credentials did not resolve to a user"))?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_credentials_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic abc"));
        headers.insert(
            "cookie",
            HeaderValue::from_static("session_id=tok-1; other=x"),
        );

        let credentials = credentials_from_headers(&headers, "session_id");
        assert_eq!(credentials.authorization.as_deref(), Some("Basic abc"));
        assert_eq!(credentials.session_cookie.as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_empty_headers_give_empty_credentials() {
        let credentials = credentials_from_headers(&HeaderMap::new(), "session_id");
        assert!(credentials.is_empty());
    }
}
