//! User self-service handlers.

use axum::Json;

use crate::dto::response::ProfileResponse;
use crate::extractors::CurrentUser;

/// GET /api/v1/profile
pub async fn profile(CurrentUser(user): CurrentUser) -> Json<ProfileResponse> {
    Json(ProfileResponse { email: user.email })
}
