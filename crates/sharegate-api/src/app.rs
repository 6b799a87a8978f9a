//! Application builder: wires router, host middleware, and state.

use axum::Router;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// At most `server.max_concurrent_requests` requests are handled at once;
/// the rest wait for a slot.
pub fn build_app(state: AppState) -> Router {
    let max_concurrent = state.config.server.max_concurrent_requests.max(1);

    build_router(state)
        .layer(GlobalConcurrencyLimitLayer::new(max_concurrent))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
