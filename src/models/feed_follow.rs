//! Feed follow models.
//!
//! A feed follow links one user to one feed. A user follows a given feed at
//! most once (unique on `user_id, feed_id`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the `feed_follows` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct FeedFollow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub feed_id: Uuid,
}

/// Request body for `POST /v1/feed_follows`.
///
/// ```json
/// { "feed_id": "550e8400-e29b-41d4-a716-446655440000" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateFeedFollowRequest {
    pub feed_id: Uuid,
}

/// Insert parameters for a feed follow.
#[derive(Debug, Clone)]
pub struct NewFeedFollow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub feed_id: Uuid,
}

impl NewFeedFollow {
    pub fn new(user_id: Uuid, feed_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            user_id,
            feed_id,
        }
    }
}

/// Response for `GET /v1/feed_follows`.
#[derive(Debug, Serialize)]
pub struct FeedFollowsResponse {
    pub feed_follows: Vec<FeedFollow>,
}
