//! Content handlers backed by the cached file servers.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use sharegate_core::types::decode;

use crate::router::STATIC_MOUNT;
use crate::state::AppState;

/// Fallback for the gated tree. Runs behind the gate pipeline.
pub async fn serve_gated(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    match decode(uri.path()) {
        Some(path) => state.routes.serve(&path, &headers).await,
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// GET /~/{*path} and GET /favicon.ico
pub async fn serve_asset(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let Some(path) = decode(uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let relative = path.strip_prefix(STATIC_MOUNT).unwrap_or(&path);
    state.assets.serve(relative, &headers).await
}
