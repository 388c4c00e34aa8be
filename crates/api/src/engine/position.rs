//! Live queue positions.

use sqlx::PgPool;
use waitline_core::error::CoreError;
use waitline_core::position::Placement;
use waitline_core::types::DbId;
use waitline_db::repositories::{QueueEntryRepo, QueueRepo, ServiceRepo};

use crate::error::AppResult;

/// Read-only ranking of waiting clients.
#[derive(Clone)]
pub struct PositionTracker {
    pool: PgPool,
}

impl PositionTracker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Zero-based rank of `registration_id` in `queue_id`, `None` if the
    /// client is not waiting there.
    pub async fn rank_in_queue(
        &self,
        queue_id: DbId,
        registration_id: &str,
    ) -> AppResult<Placement> {
        let queue = QueueRepo::find_by_id(&self.pool, queue_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Queue",
                id: queue_id,
            })?;

        let rank = QueueEntryRepo::position(&self.pool, queue_id, registration_id).await?;

        Ok(Placement {
            queue_id: queue.id,
            queue_name: queue.name,
            rank,
        })
    }

    /// Where `registration_id` waits among the queues of `service_id`.
    pub async fn placement_in_service(
        &self,
        service_id: DbId,
        registration_id: &str,
    ) -> AppResult<Placement> {
        ServiceRepo::find_by_id(&self.pool, service_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Service",
                id: service_id,
            })?;

        let placement = QueueEntryRepo::placement_in_service(&self.pool, service_id, registration_id)
            .await?
            .ok_or_else(|| CoreError::ClientNotInQueue {
                registration_id: registration_id.to_string(),
            })?;

        Ok(placement.into())
    }
}
