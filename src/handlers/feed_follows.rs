//! Feed follow HTTP handlers. All routes require an API key.
//!
//! - POST /v1/feed_follows - Follow a feed
//! - GET /v1/feed_follows - List the caller's follows
//! - DELETE /v1/feed_follows/{feed_follow_id} - Unfollow

use crate::{
    db::DbPool,
    error::AppError,
    extract::JsonBody,
    middleware::auth::AuthContext,
    models::feed_follow::{
        CreateFeedFollowRequest, FeedFollow, FeedFollowsResponse, NewFeedFollow,
    },
    services::feed_follow_service,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use uuid::Uuid;

/// Follow a feed.
///
/// # Request Body
///
/// ```json
/// { "feed_id": "550e8400-e29b-41d4-a716-446655440000" }
/// ```
///
/// # Response
///
/// - **201 Created**: the new feed follow
/// - **404**: the feed does not exist
/// - **409**: the caller already follows this feed
pub async fn create_feed_follow(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    JsonBody(request): JsonBody<CreateFeedFollowRequest>,
) -> Result<(StatusCode, Json<FeedFollow>), AppError> {
    let new_follow = NewFeedFollow::new(auth.user.id, request.feed_id);
    let feed_follow = feed_follow_service::create_feed_follow(&pool, new_follow).await?;

    Ok((StatusCode::CREATED, Json(feed_follow)))
}

/// List the caller's feed follows, newest first.
pub async fn list_feed_follows(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<FeedFollowsResponse>, AppError> {
    let feed_follows = feed_follow_service::list_feed_follows(&pool, auth.user.id).await?;

    Ok(Json(FeedFollowsResponse { feed_follows }))
}

/// Unfollow a feed.
///
/// The id is taken as a raw string so a malformed one produces the API's own
/// 400 body rather than axum's plain-text path rejection.
///
/// # Response
///
/// - **200 OK**: `{}`
/// - **400**: the id is not a UUID
/// - **404**: no such follow for this user (including one already deleted)
pub async fn delete_feed_follow(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(feed_follow_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let feed_follow_id = Uuid::parse_str(&feed_follow_id)
        .map_err(|_| AppError::InvalidRequest("invalid feed follow id".to_string()))?;

    feed_follow_service::delete_feed_follow(&pool, auth.user.id, feed_follow_id).await?;

    Ok(Json(json!({})))
}
