//! Auth handlers: register, login, logout, password reset.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use validator::Validate;

use authhub_core::entity::SessionId;
use authhub_core::error::{AppError, ErrorKind};

use crate::dto::request::{
    LoginRequest, RegisterRequest, ResetTokenRequest, UpdatePasswordRequest,
};
use crate::dto::response::{LoginResponse, MessageResponse, RegisterResponse, ResetTokenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/users
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::from(AppError::validation(e.to_string())))?;

    let user = state.accounts.register_user(&req.email, &req.password).await?;

    Ok(Json(RegisterResponse {
        email: user.email,
        message: "user created".to_string(),
    }))
}

/// POST /api/v1/sessions
///
/// Sets the session cookie on success; 401 on bad credentials.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    req.validate()
        .map_err(|e| ApiError::from(AppError::validation(e.to_string())))?;

    let session = state.accounts.login(&req.email, &req.password).await?;

    let mut cookie = Cookie::new(
        state.config.auth.session_cookie.clone(),
        session.id.to_string(),
    );
    cookie.set_path("/");
    cookie.set_http_only(true);
    let jar = jar.add(cookie);

    Ok((
        jar,
        Json(LoginResponse {
            email: req.email,
            message: "logged in".to_string(),
        }),
    ))
}

/// DELETE /api/v1/sessions
///
/// 403 when the request carries no session that resolves to a user.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    let token = jar
        .get(&state.config.auth.session_cookie)
        .map(|c| c.value().to_string())
        .ok_or_else(|| ApiError::from(AppError::authorization("No session to log out")))?;

    let session_id = SessionId::from(token);
    state
        .accounts
        .user_from_session(&session_id)
        .await?
        .ok_or_else(|| ApiError::from(AppError::authorization("Session does not resolve to a user")))?;

    state.accounts.logout(&session_id);
    let jar = jar.remove(Cookie::from(state.config.auth.session_cookie.clone()));

    Ok((
        jar,
        Json(MessageResponse {
            message: "logged out".to_string(),
        }),
    ))
}

/// POST /api/v1/reset_password
///
/// 403 on unknown email.
pub async fn issue_reset_token(
    State(state): State<AppState>,
    Json(req): Json<ResetTokenRequest>,
) -> Result<Json<ResetTokenResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::from(AppError::validation(e.to_string())))?;

    match state.accounts.issue_reset_token(&req.email).await {
        Ok(token) => Ok(Json(ResetTokenResponse {
            email: req.email,
            reset_token: token,
        })),
        Err(e) if e.kind == ErrorKind::NotFound => {
            Err(AppError::authorization("No user registered under that email").into())
        }
        Err(e) => Err(e.into()),
    }
}

/// PUT /api/v1/reset_password
///
/// 403 on an invalid token.
pub async fn update_password(
    State(state): State<AppState>,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::from(AppError::validation(e.to_string())))?;

    state
        .accounts
        .reset_password(&req.reset_token, &req.new_password)
        .await?;

    Ok(Json(MessageResponse {
        message: "Password updated".to_string(),
    }))
}
