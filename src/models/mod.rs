//! Data models representing database entities and API payloads.

use crate::error::AppError;

/// API key generation
pub mod api_key;
/// Feed model
pub mod feed;
/// Feed follow (subscription) model
pub mod feed_follow;
/// User model
pub mod user;

const MAX_NAME_LEN: usize = 255;

/// Trim a display name and reject it if empty, over-long or holding a NUL byte.
pub(crate) fn normalize_name(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidRequest(format!("{field} is required")));
    }
    if trimmed.contains('\0') {
        return Err(AppError::InvalidRequest(format!(
            "{field} contains invalid characters"
        )));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(AppError::InvalidRequest(format!(
            "{field} exceeds {MAX_NAME_LEN} characters"
        )));
    }

    Ok(trimmed.to_string())
}
