//! Feed subscription API.
//!
//! A REST API for users, RSS feeds and per-user feed follows, backed by
//! PostgreSQL. Protected endpoints authenticate with a per-user API key sent
//! as `Authorization: ApiKey <key>`.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: API key header resolved to a user by middleware
//! - **Format**: JSON requests/responses, errors as `{"error": "..."}`

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use db::DbPool;
pub use error::AppError;
pub use routes::create_router;
