//! Feed follow persistence.
//!
//! Every query is scoped to the calling user; a user can never see or delete
//! another user's follows.

use crate::{
    db::DbPool,
    error::{AppError, is_foreign_key_violation, is_unique_violation},
    models::feed_follow::{FeedFollow, NewFeedFollow},
    services::feed_service,
};
use uuid::Uuid;

/// Follow a feed.
///
/// The feed must exist. The existence check runs first so the common case gets
/// a clean 404; a feed deleted between the check and the insert trips the
/// foreign key instead and maps to the same error.
///
/// # Errors
///
/// - `FeedNotFound`: no feed with `feed_id`
/// - `AlreadyFollowing`: the user already follows this feed
pub async fn create_feed_follow(
    pool: &DbPool,
    new_follow: NewFeedFollow,
) -> Result<FeedFollow, AppError> {
    if !feed_service::feed_exists(pool, new_follow.feed_id).await? {
        return Err(AppError::FeedNotFound);
    }

    let feed_follow = sqlx::query_as::<_, FeedFollow>(
        r#"
        INSERT INTO feed_follows (id, created_at, updated_at, user_id, feed_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, created_at, updated_at, user_id, feed_id
        "#,
    )
    .bind(new_follow.id)
    .bind(new_follow.created_at)
    .bind(new_follow.updated_at)
    .bind(new_follow.user_id)
    .bind(new_follow.feed_id)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            AppError::AlreadyFollowing
        } else if is_foreign_key_violation(&err) {
            AppError::FeedNotFound
        } else {
            AppError::Database(err)
        }
    })?;

    tracing::info!(
        feed_follow_id = %feed_follow.id,
        user_id = %feed_follow.user_id,
        feed_id = %feed_follow.feed_id,
        "feed followed"
    );

    Ok(feed_follow)
}

/// List the user's feed follows, newest first.
pub async fn list_feed_follows(pool: &DbPool, user_id: Uuid) -> Result<Vec<FeedFollow>, AppError> {
    let follows = sqlx::query_as::<_, FeedFollow>(
        r#"
        SELECT id, created_at, updated_at, user_id, feed_id
        FROM feed_follows
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(follows)
}

/// Unfollow: delete one of the user's feed follows.
///
/// Deleting an id that does not exist, was already deleted, or belongs to a
/// different user fails with `FeedFollowNotFound`.
pub async fn delete_feed_follow(
    pool: &DbPool,
    user_id: Uuid,
    feed_follow_id: Uuid,
) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM feed_follows WHERE id = $1 AND user_id = $2")
        .bind(feed_follow_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::FeedFollowNotFound);
    }

    tracing::info!(%feed_follow_id, %user_id, "feed unfollowed");

    Ok(())
}
