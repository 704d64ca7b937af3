//! User HTTP handlers.
//!
//! - POST /v1/users - Sign up (public)
//! - GET /v1/users - Current user (API key)

use crate::{
    db::DbPool,
    error::AppError,
    extract::JsonBody,
    middleware::auth::AuthContext,
    models::user::{CreateUserRequest, User},
    services::user_service,
};
use axum::{Extension, Json, extract::State, http::StatusCode};

/// Create a user.
///
/// # Request Body
///
/// ```json
/// { "name": "alice" }
/// ```
///
/// # Response
///
/// - **201 Created**: the new user, including the generated `api_key`
/// - **400**: blank or over-long name
/// - **500**: body could not be decoded, or database error
pub async fn create_user(
    State(pool): State<DbPool>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let new_user = request.into_new_user()?;
    let user = user_service::create_user(&pool, new_user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Return the authenticated user.
///
/// The auth middleware has already resolved the key, so no further query is
/// needed.
pub async fn get_current_user(Extension(auth): Extension<AuthContext>) -> Json<User> {
    Json(auth.user)
}
