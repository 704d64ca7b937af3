//! Error types and HTTP error response handling.
//!
//! Every failure a handler or middleware can produce is an [`AppError`]. The
//! `IntoResponse` impl turns it into a status code plus a `{"error": "..."}`
//! JSON body. Store failures are logged here and replaced with a fixed message
//! so that no database detail reaches the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed. Returns 500 with a generic message.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request had no `Authorization` header.
    #[error("no api key found")]
    MissingApiKey,

    /// `Authorization` header was not of the form `ApiKey <token>`.
    #[error("invalid header format")]
    MalformedAuthHeader,

    /// Header was well formed but no user owns the key.
    #[error("invalid api key")]
    InvalidApiKey,

    /// JSON body could not be decoded into the expected parameters. Returns 500.
    #[error("couldn't decode parameters")]
    InvalidParameters,

    /// Request decoded but failed validation. Returns 400.
    #[error("{0}")]
    InvalidRequest(String),

    /// Referenced feed does not exist. Returns 404.
    #[error("feed not found")]
    FeedNotFound,

    /// Feed follow does not exist or belongs to another user. Returns 404.
    #[error("feed follow not found")]
    FeedFollowNotFound,

    /// Another feed already uses this URL. Returns 409.
    #[error("feed already exists")]
    FeedAlreadyExists,

    /// User already follows this feed. Returns 409.
    #[error("feed already followed")]
    AlreadyFollowing,

    /// No route matches the request path. Returns 404.
    #[error("not found")]
    RouteNotFound,

    /// Path matched but the HTTP method is not supported there. Returns 405.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Generic server failure with nothing further to report.
    #[error("Internal Server Error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingApiKey | AppError::MalformedAuthHeader | AppError::InvalidApiKey => {
                StatusCode::UNAUTHORIZED
            }
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::FeedNotFound | AppError::FeedFollowNotFound | AppError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::FeedAlreadyExists | AppError::AlreadyFollowing => StatusCode::CONFLICT,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_) | AppError::InvalidParameters | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "database operation failed");
                AppError::Internal.to_string()
            }
            ref other => other.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Whether the error is a PostgreSQL unique constraint violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Whether the error is a PostgreSQL foreign key violation (SQLSTATE 23503).
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn auth_failures_are_unauthorized() {
        let (status, body) = render(AppError::MissingApiKey).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "no api key found");

        let (status, body) = render(AppError::MalformedAuthHeader).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid header format");

        let (status, _) = render(AppError::InvalidApiKey).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn database_errors_do_not_leak_detail() {
        let (status, body) = render(AppError::Database(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn decode_failure_keeps_internal_status() {
        let (status, body) = render(AppError::InvalidParameters).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "couldn't decode parameters");
    }

    #[tokio::test]
    async fn validation_message_is_passed_through() {
        let (status, body) = render(AppError::InvalidRequest("name is required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name is required");
    }

    #[test]
    fn conflict_and_missing_resources() {
        assert_eq!(AppError::FeedNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::FeedFollowNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::FeedAlreadyExists.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::AlreadyFollowing.status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn non_database_errors_are_not_constraint_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_foreign_key_violation(&sqlx::Error::PoolTimedOut));
    }
}
