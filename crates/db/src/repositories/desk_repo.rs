//! Repository for the `desks` table and the desk detail projection.

use std::collections::HashMap;

use sqlx::PgPool;
use waitline_core::types::DbId;

use crate::models::desk::{Desk, DeskDetail, DeskService, QueueLine};
use crate::models::queue_entry::WaitingClient;
use crate::repositories::{QueueEntryRepo, QueueRepo, ServiceRepo};

/// Column list for `desks` queries.
const COLUMNS: &str = "id, organization_id, name, attendant_id, created_at, updated_at";

/// Read access to desks.
pub struct DeskRepo;

impl DeskRepo {
    /// Find a desk by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Desk>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM desks WHERE id = $1");
        sqlx::query_as::<_, Desk>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Assemble the desk with its services, their queues (priority order) and
    /// each queue's waiting clients (arrival order).
    ///
    /// Returns `None` if the desk does not exist.
    pub async fn detail(pool: &PgPool, desk_id: DbId) -> Result<Option<DeskDetail>, sqlx::Error> {
        let Some(desk) = Self::find_by_id(pool, desk_id).await? else {
            return Ok(None);
        };

        let services = ServiceRepo::list_by_desk(pool, desk_id).await?;
        let service_ids: Vec<DbId> = services.iter().map(|s| s.id).collect();
        let queues = QueueRepo::list_by_services(pool, &service_ids).await?;
        let queue_ids: Vec<DbId> = queues.iter().map(|q| q.id).collect();
        let waiting = QueueEntryRepo::list_waiting_for_queues(pool, &queue_ids).await?;

        let mut waiting_by_queue: HashMap<DbId, Vec<WaitingClient>> = HashMap::new();
        for w in waiting {
            waiting_by_queue.entry(w.queue_id).or_default().push(w);
        }

        let mut lines_by_service: HashMap<DbId, Vec<QueueLine>> = HashMap::new();
        for queue in queues {
            let waiting = waiting_by_queue.remove(&queue.id).unwrap_or_default();
            lines_by_service
                .entry(queue.service_id)
                .or_default()
                .push(QueueLine { queue, waiting });
        }

        let services = services
            .into_iter()
            .map(|service| DeskService {
                queues: lines_by_service.remove(&service.id).unwrap_or_default(),
                service,
            })
            .collect();

        Ok(Some(DeskDetail { desk, services }))
    }
}
