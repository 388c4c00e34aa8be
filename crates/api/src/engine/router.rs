//! Enter-service routing.
//!
//! Resolves which queue a client joins when entering a service and enqueues
//! them there, at most once while they are still waiting.

use sqlx::PgPool;
use waitline_core::error::CoreError;
use waitline_core::position::Placement;
use waitline_core::routing::{choose_target_queue, RouteCandidate};
use waitline_core::service_window::WindowMode;
use waitline_core::types::DbId;
use waitline_db::models::queue::Queue;
use waitline_db::repositories::{ClientRepo, GroupRepo, QueueEntryRepo, QueueRepo, ServiceRepo};

use crate::error::AppResult;

/// Routes clients entering a service into the right queue.
#[derive(Clone)]
pub struct QueueRouter {
    pool: PgPool,
    window: WindowMode,
}

impl QueueRouter {
    pub fn new(pool: PgPool, window: WindowMode) -> Self {
        Self { pool, window }
    }

    /// Enter `client_id` into `service_id` and report where they wait.
    ///
    /// Fails with `ServiceNotOpen` outside the service window. Re-entering
    /// while still waiting creates no new entry and reports the queue the
    /// client already waits in, which may belong to another service.
    pub async fn route(
        &self,
        organization_id: DbId,
        service_id: DbId,
        client_id: DbId,
    ) -> AppResult<Placement> {
        let service = ServiceRepo::find_in_organization(&self.pool, organization_id, service_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Service",
                id: service_id,
            })?;

        if !service.is_open(self.window, chrono::Utc::now()) {
            return Err(CoreError::ServiceNotOpen { service_id }.into());
        }

        let target = self.admit(organization_id, service_id, client_id).await?;

        // Ranked outside the transaction; a desk may call the client in
        // between, in which case there is no rank to report.
        let placement = QueueEntryRepo::placement_of_client(&self.pool, client_id)
            .await?
            .map(Placement::from)
            .unwrap_or(Placement {
                queue_id: target.id,
                queue_name: target.name,
                rank: None,
            });

        Ok(placement)
    }

    /// Resolve the target queue and insert the entry, in one transaction.
    ///
    /// The client row stays locked until commit so two concurrent entries
    /// for the same client cannot both see "not waiting".
    async fn admit(
        &self,
        organization_id: DbId,
        service_id: DbId,
        client_id: DbId,
    ) -> AppResult<Queue> {
        let mut tx = self.pool.begin().await?;

        ClientRepo::lock_for_update(&mut *tx, organization_id, client_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Client",
                id: client_id,
            })?;

        let group_ids = GroupRepo::group_ids_of_client(&mut *tx, client_id).await?;
        if group_ids.is_empty() {
            return Err(CoreError::UserNotInAnyGroup { client_id }.into());
        }

        let no_queue = CoreError::NoQueueAvailable {
            service_id,
            client_id,
        };

        let reachable = QueueRepo::list_for_groups(&mut *tx, &group_ids).await?;
        let candidates: Vec<RouteCandidate> = reachable.iter().map(RouteCandidate::from).collect();
        let target_id = choose_target_queue(&candidates, organization_id, service_id)
            .map(|c| c.queue_id)
            .ok_or(no_queue)?;
        let target = reachable
            .into_iter()
            .find(|q| q.id == target_id)
            .ok_or_else(|| CoreError::Internal(format!("queue {target_id} vanished")))?;

        match QueueEntryRepo::find_waiting_for_client(&mut *tx, client_id).await? {
            Some(existing) => {
                tracing::debug!(
                    client_id,
                    queue_id = existing.queue_id,
                    entry_id = existing.id,
                    "Client already waiting, not re-enqueued",
                );
            }
            None => {
                let entry = QueueEntryRepo::create(&mut *tx, client_id, target.id).await?;
                tracing::info!(
                    client_id,
                    service_id,
                    queue_id = target.id,
                    entry_id = entry.id,
                    "Client enqueued",
                );
            }
        }

        tx.commit().await?;
        Ok(target)
    }
}
