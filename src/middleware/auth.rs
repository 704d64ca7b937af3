//! API key authentication middleware.
//!
//! Protected routes expect `Authorization: ApiKey <token>`. The middleware
//! parses the header, resolves the token to a user and inserts an
//! [`AuthContext`] into the request extensions before calling the handler.
//! Any failure short-circuits with an error response.

use crate::{db::DbPool, error::AppError, models::user::User, services::user_service};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// Authentication scheme keyword, compared ignoring ASCII case.
const SCHEME: &str = "apikey";

/// Authentication context attached to authenticated requests.
///
/// Handlers extract it with `Extension<AuthContext>`.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
}

/// Extract the API key from the `Authorization` header.
///
/// The header value, split on single spaces, must be exactly
/// `[<scheme>, <token>]` with `<scheme>` equal to `ApiKey` in any case and a
/// non-empty token.
///
/// # Errors
///
/// - `MissingApiKey`: header absent or empty
/// - `MalformedAuthHeader`: anything else that is not `ApiKey <token>`
pub fn extract_api_key(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = match headers.get(AUTHORIZATION) {
        None => return Err(AppError::MissingApiKey),
        Some(value) if value.is_empty() => return Err(AppError::MissingApiKey),
        Some(value) => value.to_str().map_err(|_| AppError::MalformedAuthHeader)?,
    };

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None)
            if scheme.eq_ignore_ascii_case(SCHEME) && !token.is_empty() =>
        {
            Ok(token)
        }
        _ => Err(AppError::MalformedAuthHeader),
    }
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Parse `Authorization: ApiKey <token>` (401 if missing or malformed)
/// 2. Look the token up in `users` (401 if no user owns it, 500 on store error)
/// 3. Insert `AuthContext` and call the next handler
pub async fn auth_middleware(
    State(pool): State<DbPool>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = extract_api_key(request.headers()).inspect_err(|err| {
        tracing::debug!(reason = %err, "rejecting request without usable api key");
    })?;

    let user = user_service::find_user_by_api_key(&pool, api_key)
        .await?
        .ok_or_else(|| {
            tracing::debug!("rejecting request with unknown api key");
            AppError::InvalidApiKey
        })?;

    request.extensions_mut().insert(AuthContext { user });

    Ok(next.run(request).await)
}
