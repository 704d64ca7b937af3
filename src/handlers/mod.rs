//! HTTP request handlers.
//!
//! Each handler decodes its input, calls one service function and encodes
//! the result. Errors are returned as `AppError` and rendered by its
//! `IntoResponse` impl.

/// Feed follow endpoints
pub mod feed_follows;
/// Feed endpoints
pub mod feeds;
/// Readiness, error simulation and fallback
pub mod health;
/// User endpoints
pub mod users;
