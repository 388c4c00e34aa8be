//! Route definitions for the `/services` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::service;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET /{id}/position/{registration_id}  -> get_position
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/position/{registration_id}", get(service::get_position))
}
