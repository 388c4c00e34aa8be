//! Route definitions for organization-scoped admission.

use axum::routing::post;
use axum::Router;

use crate::handlers::admission;
use crate::state::AppState;

/// Routes mounted at `/organizations`.
///
/// ```text
/// POST /{org_id}/services/{service_id}/enter  -> enter_service
/// POST /{org_id}/queues/{queue_id}/attach     -> attach_to_queue
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{org_id}/services/{service_id}/enter",
            post(admission::enter_service),
        )
        .route(
            "/{org_id}/queues/{queue_id}/attach",
            post(admission::attach_to_queue),
        )
}
