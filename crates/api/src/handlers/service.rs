//! Handlers for service-scoped lookups.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use waitline_core::ids::parse_id;

use crate::error::AppResult;
use crate::handlers::admission::PlacementResponse;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/services/{service_id}/position/{registration_id}
///
/// Which of the service's queues the client waits in, and their 1-based
/// position there.
pub async fn get_position(
    State(state): State<AppState>,
    Path((service_id, registration_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let service_id = parse_id(&service_id)?;
    let placement = state
        .positions
        .placement_in_service(service_id, &registration_id)
        .await?;

    Ok(Json(DataResponse {
        data: PlacementResponse::from(placement),
    }))
}
