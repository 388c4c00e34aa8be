//! Route definitions for the `/desks` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::desk;
use crate::state::AppState;

/// Routes mounted at `/desks`.
///
/// ```text
/// GET  /{id}              -> get_desk
/// POST /{id}/call-next    -> call_next
/// GET  /{id}/last-served  -> last_served
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(desk::get_desk))
        .route("/{id}/call-next", post(desk::call_next))
        .route("/{id}/last-served", get(desk::last_served))
}
