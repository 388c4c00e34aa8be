//! Direct attach of a client to a specific queue.

use sqlx::PgPool;
use waitline_core::error::CoreError;
use waitline_core::routing::shares_group;
use waitline_core::service_window::WindowMode;
use waitline_core::types::DbId;
use waitline_db::models::queue_entry::QueueEntry;
use waitline_db::repositories::{ClientRepo, GroupRepo, QueueEntryRepo, QueueRepo, ServiceRepo};

use crate::error::AppResult;

/// Enqueues a client into a named queue after checking the service window
/// and the queue's eligibility groups.
#[derive(Clone)]
pub struct QueueAttacher {
    pool: PgPool,
    window: WindowMode,
}

impl QueueAttacher {
    pub fn new(pool: PgPool, window: WindowMode) -> Self {
        Self { pool, window }
    }

    /// Attach the client registered as `registration_id` to `queue_id`.
    ///
    /// Unlike enter-service routing this does not check for an existing
    /// waiting entry: every successful call inserts a new one.
    pub async fn attach(
        &self,
        registration_id: &str,
        organization_id: DbId,
        queue_id: DbId,
    ) -> AppResult<QueueEntry> {
        let queue = QueueRepo::find_in_organization(&self.pool, organization_id, queue_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Queue",
                id: queue_id,
            })?;

        let service = ServiceRepo::find_by_id(&self.pool, queue.service_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Service",
                id: queue.service_id,
            })?;
        if !service.is_open(self.window, chrono::Utc::now()) {
            return Err(CoreError::ServiceNotOpen {
                service_id: service.id,
            }
            .into());
        }

        let client = ClientRepo::find_by_registration_id(&self.pool, organization_id, registration_id)
            .await?
            .ok_or_else(|| CoreError::UnknownRegistration {
                organization_id,
                registration_id: registration_id.to_string(),
            })?;

        let client_groups = GroupRepo::group_ids_of_client(&self.pool, client.id).await?;
        let queue_groups = GroupRepo::group_ids_for_queue(&self.pool, queue.id).await?;
        if !shares_group(&client_groups, &queue_groups) {
            tracing::debug!(
                client_id = client.id,
                queue_id = queue.id,
                ?client_groups,
                ?queue_groups,
                "Client not eligible for queue",
            );
            return Err(CoreError::UserNotInGroup {
                client_id: client.id,
                queue_id: queue.id,
            }
            .into());
        }

        let entry = QueueEntryRepo::create(&self.pool, client.id, queue.id).await?;
        tracing::info!(
            client_id = client.id,
            queue_id = queue.id,
            entry_id = entry.id,
            "Client attached to queue",
        );

        Ok(entry)
    }
}
