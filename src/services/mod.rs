//! Persistence services.
//!
//! Services own the SQL. Handlers call them after decoding and validating a
//! request, and map the results into responses.

pub mod feed_follow_service;
pub mod feed_service;
pub mod user_service;
