//! Desk call-next.
//!
//! A desk serves every open service assigned to it. Its next client comes
//! from the lowest-numbered priority tier that has anyone waiting, earliest
//! arrival first; see [`waitline_core::dispatch`].

use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;
use waitline_core::dispatch::{DispatchCandidates, QueueCandidate, WaitingEntry};
use waitline_core::error::CoreError;
use waitline_core::ids::ensure_valid_id;
use waitline_core::service_window::WindowMode;
use waitline_core::types::DbId;
use waitline_db::models::desk::{Desk, DeskDetail};
use waitline_db::models::queue_entry::{QueueEntry, ServedClient};
use waitline_db::repositories::{DeskRepo, QueueEntryRepo, QueueRepo, ServiceRepo};

use crate::error::AppResult;

/// Result of a successful desk call: who was called, and the desk as it looks
/// afterwards.
#[derive(Debug, Serialize)]
pub struct CallOutcome {
    pub client: ServedClient,
    pub desk: DeskDetail,
}

/// Selects and claims the next client for desks and single queues.
#[derive(Clone)]
pub struct DeskDispatcher {
    pool: PgPool,
    window: WindowMode,
}

impl DeskDispatcher {
    pub fn new(pool: PgPool, window: WindowMode) -> Self {
        Self { pool, window }
    }

    /// Call the next client for `desk_id`.
    ///
    /// `attendant_id` defaults to the desk's assigned attendant. Returns
    /// `None` when nobody is waiting in any open service of the desk.
    pub async fn call_next(
        &self,
        desk_id: DbId,
        attendant_id: Option<DbId>,
    ) -> AppResult<Option<CallOutcome>> {
        let desk_id = ensure_valid_id(desk_id)?;
        let desk = self.find_desk(desk_id).await?;
        let attendant_id = attendant_id.or(desk.attendant_id);

        let mut candidates = self.load_candidates(desk_id).await?;
        tracing::debug!(
            desk_id,
            tiers = ?candidates.tiers(),
            waiting = candidates.waiting_count(),
            "Selecting next client",
        );

        while let Some(selection) = candidates.select_next() {
            let claimed =
                QueueEntryRepo::claim_entry(&self.pool, selection.entry_id, attendant_id).await?;

            let Some(entry) = claimed else {
                // Another desk got there first; try the next candidate.
                tracing::debug!(
                    desk_id,
                    queue_id = selection.queue_id,
                    client_id = selection.client_id,
                    entry_id = selection.entry_id,
                    "Candidate already claimed",
                );
                candidates.discard(selection.entry_id);
                continue;
            };

            tracing::info!(
                desk_id,
                attendant_id = ?attendant_id,
                queue_id = entry.queue_id,
                client_id = entry.client_id,
                entry_id = entry.id,
                "Client called to desk",
            );

            let client = QueueEntryRepo::find_served(&self.pool, entry.id)
                .await?
                .ok_or_else(|| CoreError::Internal(format!("called entry {} vanished", entry.id)))?;
            let desk = self.detail(desk_id).await?;

            return Ok(Some(CallOutcome { client, desk }));
        }

        tracing::debug!(desk_id, "No client waiting for desk");
        Ok(None)
    }

    /// Call the earliest waiting client of a single queue, without recording
    /// an attendant.
    pub async fn call_next_in_queue(&self, queue_id: DbId) -> AppResult<Option<QueueEntry>> {
        QueueRepo::find_by_id(&self.pool, queue_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Queue",
                id: queue_id,
            })?;

        let entry = QueueEntryRepo::claim_next_in_queue(&self.pool, queue_id).await?;
        match &entry {
            Some(e) => tracing::info!(
                queue_id,
                client_id = e.client_id,
                entry_id = e.id,
                "Client called from queue",
            ),
            None => tracing::debug!(queue_id, "Queue is empty"),
        }

        Ok(entry)
    }

    /// The desk with its services, queues and waiting clients.
    pub async fn detail(&self, desk_id: DbId) -> AppResult<DeskDetail> {
        let desk_id = ensure_valid_id(desk_id)?;
        let detail = DeskRepo::detail(&self.pool, desk_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Desk",
                id: desk_id,
            })?;
        Ok(detail)
    }

    /// The client most recently called by the desk's attendant.
    pub async fn last_served(&self, desk_id: DbId) -> AppResult<Option<ServedClient>> {
        let desk_id = ensure_valid_id(desk_id)?;
        self.find_desk(desk_id).await?;
        Ok(QueueEntryRepo::last_served_at_desk(&self.pool, desk_id).await?)
    }

    async fn find_desk(&self, desk_id: DbId) -> AppResult<Desk> {
        let desk = DeskRepo::find_by_id(&self.pool, desk_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Desk",
                id: desk_id,
            })?;
        Ok(desk)
    }

    /// Flatten the waiting lines of every queue in the desk's open services.
    async fn load_candidates(&self, desk_id: DbId) -> AppResult<DispatchCandidates> {
        let now = chrono::Utc::now();
        let open_service_ids: Vec<DbId> = ServiceRepo::list_by_desk(&self.pool, desk_id)
            .await?
            .into_iter()
            .filter(|s| s.is_open(self.window, now))
            .map(|s| s.id)
            .collect();

        let queues = QueueRepo::list_by_services(&self.pool, &open_service_ids).await?;
        let queue_ids: Vec<DbId> = queues.iter().map(|q| q.id).collect();
        let waiting = QueueEntryRepo::list_waiting_for_queues(&self.pool, &queue_ids).await?;

        let mut by_queue: HashMap<DbId, Vec<WaitingEntry>> = HashMap::new();
        for w in &waiting {
            by_queue.entry(w.queue_id).or_default().push(w.into());
        }

        let candidates = queues
            .iter()
            .map(|q| QueueCandidate {
                queue_id: q.id,
                priority: q.priority,
                waiting: by_queue.remove(&q.id).unwrap_or_default(),
            })
            .collect();

        Ok(DispatchCandidates::new(candidates))
    }
}
