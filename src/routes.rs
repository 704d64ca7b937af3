//! Route table.
//!
//! Every endpoint lives under `/v1`. Routes in the authenticated group are
//! wrapped in the API key middleware with `route_layer`, so the middleware
//! only runs for requests that actually match one of them; unknown paths
//! still fall through to the 404 fallback and unsupported methods get 405.

use std::time::Duration;

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{db::DbPool, handlers, middleware};

/// Path prefix shared by every route.
pub const API_PREFIX: &str = "/v1";

/// Build the application router around a database pool.
pub fn create_router(pool: DbPool) -> Router {
    let public_routes = Router::new()
        .route("/readiness", get(handlers::health::readiness))
        .route("/err", get(handlers::health::simulate_error))
        .route("/users", post(handlers::users::create_user))
        .route("/feeds", get(handlers::feeds::list_feeds));

    let authenticated_routes = Router::new()
        .route("/users", get(handlers::users::get_current_user))
        .route("/feeds", post(handlers::feeds::create_feed))
        .route(
            "/feed_follows",
            post(handlers::feed_follows::create_feed_follow)
                .get(handlers::feed_follows::list_feed_follows),
        )
        .route(
            "/feed_follows/{feed_follow_id}",
            delete(handlers::feed_follows::delete_feed_follow),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            pool.clone(),
            middleware::auth::auth_middleware,
        ));

    // Paths shared by both groups are merged per method. `route_layer` also
    // wraps each path's method fallback in the auth check, so the fallback is
    // replaced after merging: unsupported methods answer 405 without auth.
    let v1 = authenticated_routes
        .merge(public_routes)
        .method_not_allowed_fallback(handlers::health::method_not_allowed);

    Router::new()
        .nest(API_PREFIX, v1)
        .fallback(handlers::health::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(pool)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(300))
}
