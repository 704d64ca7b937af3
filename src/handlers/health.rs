//! Liveness and error-simulation endpoints.

use crate::error::AppError;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
}

/// `GET /v1/readiness`
///
/// Always answers 200 `{"status":"ok"}` once the server is accepting
/// requests. The database is not consulted.
pub async fn readiness() -> Json<ReadinessResponse> {
    Json(ReadinessResponse { status: "ok" })
}

/// `GET /v1/err`
///
/// Always fails with 500 `{"error":"Internal Server Error"}`. Lets clients
/// exercise their error path.
pub async fn simulate_error() -> AppError {
    AppError::Internal
}

/// Fallback for unmatched routes: 404 `{"error":"not found"}`.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Fallback for a matched path with an unsupported method: 405
/// `{"error":"method not allowed"}`.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
