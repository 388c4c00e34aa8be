//! Route definitions for the `/queues` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::queue;
use crate::state::AppState;

/// Routes mounted at `/queues`.
///
/// ```text
/// GET  /{id}/position/{registration_id}  -> get_position
/// POST /{id}/call-next                   -> call_next
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/position/{registration_id}", get(queue::get_position))
        .route("/{id}/call-next", post(queue::call_next))
}
