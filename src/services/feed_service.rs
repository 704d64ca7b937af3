//! Feed persistence.
//!
//! Creating a feed also subscribes its creator to it. Both rows are written in
//! one PostgreSQL transaction: either the feed and the follow exist afterwards
//! or neither does.

use crate::{
    db::DbPool,
    error::{AppError, is_unique_violation},
    models::{
        feed::{Feed, NewFeed},
        feed_follow::{FeedFollow, NewFeedFollow},
    },
};
use uuid::Uuid;

/// Create a feed and the creator's follow of it atomically.
///
/// # Errors
///
/// - `FeedAlreadyExists`: another feed already uses this URL
/// - `Database`: any other store failure (nothing is persisted)
pub async fn create_feed_with_follow(
    pool: &DbPool,
    new_feed: NewFeed,
) -> Result<(Feed, FeedFollow), AppError> {
    let mut tx = pool.begin().await?;

    // An early return drops `tx`, which rolls the transaction back.
    let feed = sqlx::query_as::<_, Feed>(
        r#"
        INSERT INTO feeds (id, created_at, updated_at, name, url, user_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, created_at, updated_at, name, url, user_id
        "#,
    )
    .bind(new_feed.id)
    .bind(new_feed.created_at)
    .bind(new_feed.updated_at)
    .bind(&new_feed.name)
    .bind(&new_feed.url)
    .bind(new_feed.user_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            AppError::FeedAlreadyExists
        } else {
            AppError::Database(err)
        }
    })?;

    let follow = NewFeedFollow::new(feed.user_id, feed.id);
    let feed_follow = sqlx::query_as::<_, FeedFollow>(
        r#"
        INSERT INTO feed_follows (id, created_at, updated_at, user_id, feed_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, created_at, updated_at, user_id, feed_id
        "#,
    )
    .bind(follow.id)
    .bind(follow.created_at)
    .bind(follow.updated_at)
    .bind(follow.user_id)
    .bind(follow.feed_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(
        feed_id = %feed.id,
        user_id = %feed.user_id,
        feed_follow_id = %feed_follow.id,
        "feed created"
    );

    Ok((feed, feed_follow))
}

/// List every feed, newest first.
pub async fn list_feeds(pool: &DbPool) -> Result<Vec<Feed>, AppError> {
    let feeds = sqlx::query_as::<_, Feed>(
        r#"
        SELECT id, created_at, updated_at, name, url, user_id
        FROM feeds
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(feeds)
}

/// Whether a feed with this id exists.
pub async fn feed_exists(pool: &DbPool, feed_id: Uuid) -> Result<bool, AppError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM feeds WHERE id = $1)")
        .bind(feed_id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}
