//! User persistence and the API key credential resolver.

use crate::{
    db::DbPool,
    error::AppError,
    models::user::{NewUser, User},
};

/// Insert a new user and return the stored row.
pub async fn create_user(pool: &DbPool, new_user: NewUser) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, created_at, updated_at, name, api_key)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, created_at, updated_at, name, api_key
        "#,
    )
    .bind(new_user.id)
    .bind(new_user.created_at)
    .bind(new_user.updated_at)
    .bind(&new_user.name)
    .bind(&new_user.api_key)
    .fetch_one(pool)
    .await?;

    tracing::info!(user_id = %user.id, "user created");

    Ok(user)
}

/// Resolve an API key to the user that owns it.
///
/// Returns `Ok(None)` when no user has this key. Keys are unique, so at most
/// one row can match.
pub async fn find_user_by_api_key(pool: &DbPool, api_key: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, created_at, updated_at, name, api_key
        FROM users
        WHERE api_key = $1
        "#,
    )
    .bind(api_key)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
