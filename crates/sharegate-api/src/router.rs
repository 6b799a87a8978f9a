//! Route definitions for the ShareGate HTTP surface.
//!
//! Verification, countdown, admin, and static asset routes are matched
//! first; every other path falls through to the gated content tree.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::middleware::{AuthorizationGate, BasicAuthGate, CountdownGate, GatePipeline};
use crate::state::AppState;

/// URL prefix of the public static assets.
pub const STATIC_MOUNT: &str = "/~";

/// Build the complete Axum router.
pub fn build_router(state: AppState) -> Router {
    let gated = content_gates(&state)
        .apply(Router::new().fallback(handlers::content::serve_gated))
        .with_state(state.clone());

    Router::new()
        .merge(auth_routes())
        .merge(admin_routes(&state))
        .merge(asset_routes())
        .fallback_service(gated)
        .with_state(state)
}

/// Gates in front of the content tree: countdown first, then authorization.
pub fn content_gates(state: &AppState) -> GatePipeline {
    GatePipeline::new(vec![
        Arc::new(CountdownGate::new(state.cookie.clone())),
        Arc::new(AuthorizationGate::new(state.cookie.clone())),
    ])
}

/// Gates in front of the admin issuance routes.
pub fn admin_gates(state: &AppState) -> GatePipeline {
    GatePipeline::new(vec![Arc::new(BasicAuthGate::new(
        Arc::clone(&state.admin),
        &state.config.admin.realm,
    ))])
}

/// Token verification and countdown
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(handlers::verify::verify))
        .route("/countdown", get(handlers::countdown::countdown))
}

/// Admin token issuance behind Basic auth
fn admin_routes(state: &AppState) -> Router<AppState> {
    let routes = Router::new().route(
        "/auth/token",
        get(handlers::admin::form).post(handlers::admin::issue),
    );
    admin_gates(state).apply_to_routes(routes)
}

/// Ungated static assets
fn asset_routes() -> Router<AppState> {
    Router::new()
        .route("/~", get(handlers::content::serve_asset))
        .route("/~/", get(handlers::content::serve_asset))
        .route("/~/{*path}", get(handlers::content::serve_asset))
        .route("/favicon.ico", get(handlers::content::serve_asset))
}
