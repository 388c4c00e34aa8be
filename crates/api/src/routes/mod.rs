pub mod desk;
pub mod health;
pub mod organization;
pub mod queue;
pub mod service;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /organizations/{org_id}/services/{service_id}/enter   route client into a queue (POST)
/// /organizations/{org_id}/queues/{queue_id}/attach      attach client to queue (POST)
///
/// /queues/{queue_id}/position/{registration_id}          position in queue (GET)
/// /queues/{queue_id}/call-next                           call earliest client (POST)
///
/// /services/{service_id}/position/{registration_id}      position in service (GET)
///
/// /desks/{desk_id}                                       desk detail (GET)
/// /desks/{desk_id}/call-next                             call next client (POST)
/// /desks/{desk_id}/last-served                           last client called (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Client admission (enter-service routing, direct attach).
        .nest("/organizations", organization::router())
        // Single-queue position and call-next.
        .nest("/queues", queue::router())
        // Service-wide position lookup.
        .nest("/services", service::router())
        // Desk dispatch and projections.
        .nest("/desks", desk::router())
}
