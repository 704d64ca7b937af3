//! Feed HTTP handlers.
//!
//! - POST /v1/feeds - Register a feed and follow it (API key)
//! - GET /v1/feeds - List all feeds (public)

use crate::{
    db::DbPool,
    error::AppError,
    extract::JsonBody,
    middleware::auth::AuthContext,
    models::feed::{CreateFeedRequest, CreateFeedResponse, FeedsResponse},
    services::feed_service,
};
use axum::{Extension, Json, extract::State, http::StatusCode};

/// Create a feed owned by the caller and subscribe the caller to it.
///
/// # Request Body
///
/// ```json
/// { "name": "Hacker News", "url": "https://news.ycombinator.com/rss" }
/// ```
///
/// # Response (201)
///
/// ```json
/// {
///   "feed": { "id": "...", "name": "Hacker News", "url": "...", "user_id": "...", ... },
///   "feed_follow": { "id": "...", "feed_id": "...", "user_id": "...", ... }
/// }
/// ```
///
/// - **400**: invalid name or URL
/// - **409**: a feed with this URL already exists
pub async fn create_feed(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    JsonBody(request): JsonBody<CreateFeedRequest>,
) -> Result<(StatusCode, Json<CreateFeedResponse>), AppError> {
    let new_feed = request.into_new_feed(auth.user.id)?;
    let (feed, feed_follow) = feed_service::create_feed_with_follow(&pool, new_feed).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateFeedResponse { feed, feed_follow }),
    ))
}

/// List every registered feed, newest first.
pub async fn list_feeds(State(pool): State<DbPool>) -> Result<Json<FeedsResponse>, AppError> {
    let feeds = feed_service::list_feeds(&pool).await?;

    Ok(Json(FeedsResponse { feeds }))
}
