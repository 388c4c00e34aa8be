//! Queue entity model.

use serde::Serialize;
use sqlx::FromRow;
use waitline_core::routing::RouteCandidate;
use waitline_core::types::{DbId, Priority, Timestamp};

/// A row from the `queues` table. Smaller `priority` values are served first.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Queue {
    pub id: DbId,
    pub organization_id: DbId,
    pub service_id: DbId,
    pub name: String,
    pub priority: Priority,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Queue> for RouteCandidate {
    fn from(queue: &Queue) -> Self {
        RouteCandidate {
            queue_id: queue.id,
            organization_id: queue.organization_id,
            service_id: queue.service_id,
            priority: queue.priority,
        }
    }
}
