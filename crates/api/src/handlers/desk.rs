//! Handlers for service desks.
//!
//! Desk IDs are taken as raw path segments and validated here so a malformed
//! ID yields `INVALID_ID` rather than a routing rejection.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use waitline_core::ids::parse_id;
use waitline_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for POST /desks/{desk_id}/call-next.
#[derive(Debug, Default, Deserialize)]
pub struct CallNextRequest {
    /// Staff member serving the client. Defaults to the desk's attendant.
    pub attendant_id: Option<DbId>,
}

/// GET /api/v1/desks/{desk_id}
pub async fn get_desk(
    State(state): State<AppState>,
    Path(desk_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let desk_id = parse_id(&desk_id)?;
    let detail = state.dispatcher.detail(desk_id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/desks/{desk_id}/call-next
///
/// Call the next client across every open service of the desk. `data` is
/// `null` when nobody is waiting.
pub async fn call_next(
    State(state): State<AppState>,
    Path(desk_id): Path<String>,
    body: Option<Json<CallNextRequest>>,
) -> AppResult<impl IntoResponse> {
    let desk_id = parse_id(&desk_id)?;
    let Json(input) = body.unwrap_or_default();

    let outcome = state
        .dispatcher
        .call_next(desk_id, input.attendant_id)
        .await?;

    Ok(Json(DataResponse { data: outcome }))
}

/// GET /api/v1/desks/{desk_id}/last-served
pub async fn last_served(
    State(state): State<AppState>,
    Path(desk_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let desk_id = parse_id(&desk_id)?;
    let served = state.dispatcher.last_served(desk_id).await?;
    Ok(Json(DataResponse { data: served }))
}
