//! Handlers for single-queue operations.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use waitline_core::error::CoreError;
use waitline_core::ids::parse_id;

use crate::error::AppResult;
use crate::handlers::admission::PlacementResponse;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/queues/{queue_id}/position/{registration_id}
///
/// 1-based position of a waiting client. 404 `CLIENT_NOT_IN_QUEUE` if the
/// client is not (or no longer) waiting in this queue.
pub async fn get_position(
    State(state): State<AppState>,
    Path((queue_id, registration_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let queue_id = parse_id(&queue_id)?;
    let placement = state
        .positions
        .rank_in_queue(queue_id, &registration_id)
        .await?;

    if placement.rank.is_none() {
        return Err(CoreError::ClientNotInQueue { registration_id }.into());
    }

    Ok(Json(DataResponse {
        data: PlacementResponse::from(placement),
    }))
}

/// POST /api/v1/queues/{queue_id}/call-next
///
/// Call the earliest waiting client of the queue. `data` is `null` when the
/// queue is empty.
pub async fn call_next(
    State(state): State<AppState>,
    Path(queue_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let queue_id = parse_id(&queue_id)?;
    let entry = state.dispatcher.call_next_in_queue(queue_id).await?;
    Ok(Json(DataResponse { data: entry }))
}
