//! Router configuration and middleware stack.
//!
//! # Route Structure
//!
//! - `GET  /{alias}`           - Redirect (public)
//! - `POST /modify/save-url`   - Create mapping (basic auth)
//! - `POST /modify/update-url` - Update mapping (basic auth)
//! - `POST /modify/delete-url` - Delete mapping (basic auth)
//!
//! # Middleware
//!
//! - **Request id** - UUID set and propagated via `x-request-id`
//! - **Tracing** - Per-request span carrying the request id
//! - **Panic recovery** - Panicking handlers answer 500 instead of dropping
//!   the connection
//! - **Timeout** - Per-request deadline from config (outer router only)
//! - **Path normalization** - Trailing slash handling (outer router only)

use crate::api::handlers::{delete_handler, redirect_handler, save_handler, update_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use std::time::Duration;
use tower::{Layer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the routes and the inner middleware stack.
///
/// This is the piece integration tests exercise directly; [`app_router`]
/// adds the deployment-only layers on top.
pub fn router(state: AppState) -> Router {
    let modify = Router::new()
        .route("/save-url", post(save_handler))
        .route("/update-url", post(update_handler))
        .route("/delete-url", post(delete_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/{alias}", get(redirect_handler))
        .nest("/modify", modify)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(tracing::layer())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::new()),
        )
}

/// Constructs the full application router served in production.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = router(state).layer(TimeoutLayer::new(request_timeout));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
