//! User data models and API request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{api_key::generate_api_key, normalize_name};
use crate::error::AppError;

/// A user record from the `users` table.
///
/// Serialized as-is in responses: the owner is the only one who ever sees a
/// user object, so `api_key` is included.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub api_key: String,
}

/// Request body for `POST /v1/users`.
///
/// ```json
/// { "name": "alice" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

impl CreateUserRequest {
    /// Validate the request and build the row to insert.
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        let name = normalize_name("name", &self.name)?;
        Ok(NewUser::new(name))
    }
}

/// Insert parameters for a user, with server-generated id, timestamps and key.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub api_key: String,
}

impl NewUser {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name,
            api_key: generate_api_key(),
        }
    }
}
