//! Handlers for clients entering services and queues.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use waitline_core::ids::parse_id;
use waitline_core::position::Placement;
use waitline_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request body for POST /organizations/{org_id}/services/{service_id}/enter.
#[derive(Debug, Deserialize)]
pub struct EnterServiceRequest {
    pub client_id: DbId,
}

/// Request body for POST /organizations/{org_id}/queues/{queue_id}/attach.
#[derive(Debug, Deserialize)]
pub struct AttachRequest {
    pub registration_id: String,
}

/// Where a client waits, with a 1-based position (`null` once called).
#[derive(Debug, Serialize)]
pub struct PlacementResponse {
    pub queue_id: DbId,
    pub queue_name: String,
    pub position: Option<i64>,
}

impl From<Placement> for PlacementResponse {
    fn from(p: Placement) -> Self {
        let position = p.position();
        Self {
            queue_id: p.queue_id,
            queue_name: p.queue_name,
            position,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/organizations/{org_id}/services/{service_id}/enter
///
/// Route the client into the highest-priority eligible queue of the service.
/// Repeating the call while still waiting returns the same placement.
pub async fn enter_service(
    State(state): State<AppState>,
    Path((organization_id, service_id)): Path<(String, String)>,
    body: Result<Json<EnterServiceRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let organization_id = parse_id(&organization_id)?;
    let service_id = parse_id(&service_id)?;
    let Json(input) = body?;
    let placement = state
        .router
        .route(organization_id, service_id, input.client_id)
        .await?;

    Ok(Json(DataResponse {
        data: PlacementResponse::from(placement),
    }))
}

/// POST /api/v1/organizations/{org_id}/queues/{queue_id}/attach
///
/// Enqueue a client, identified by registration ID, into a specific queue.
pub async fn attach_to_queue(
    State(state): State<AppState>,
    Path((organization_id, queue_id)): Path<(String, String)>,
    body: Result<Json<AttachRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let organization_id = parse_id(&organization_id)?;
    let queue_id = parse_id(&queue_id)?;
    let Json(input) = body?;
    let entry = state
        .attacher
        .attach(&input.registration_id, organization_id, queue_id)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}
