//! Repository for the `queue_entries` table (the waiting room).
//!
//! Arrival order everywhere is `enqueued_at ASC, id ASC`. An entry is
//! "waiting" while `called_at IS NULL`.

use sqlx::PgPool;
use waitline_core::types::DbId;

use crate::models::queue_entry::{PlacementRow, QueueEntry, ServedClient, WaitingClient};

/// Column list for `queue_entries` queries.
const COLUMNS: &str = "id, client_id, queue_id, enqueued_at, called_at, attended_by";

/// Projection shared by the served-client queries. Expects the aliases
/// `qe` (queue_entries), `q` (queues) and `c` (clients).
const SERVED_COLUMNS: &str = "\
    qe.id AS entry_id, qe.queue_id, q.name AS queue_name, \
    qe.client_id, c.registration_id, c.name AS client_name, \
    qe.enqueued_at, qe.called_at, qe.attended_by";

/// Access to the waiting room: admission, ranking, and claiming.
pub struct QueueEntryRepo;

impl QueueEntryRepo {
    /// Insert a waiting entry for `client_id` in `queue_id`, stamped `NOW()`.
    pub async fn create<'e, E>(
        executor: E,
        client_id: DbId,
        queue_id: DbId,
    ) -> Result<QueueEntry, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO queue_entries (client_id, queue_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueueEntry>(&query)
            .bind(client_id)
            .bind(queue_id)
            .fetch_one(executor)
            .await
    }

    /// The client's earliest uncalled entry in any queue, if one exists.
    pub async fn find_waiting_for_client<'e, E>(
        executor: E,
        client_id: DbId,
    ) -> Result<Option<QueueEntry>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM queue_entries \
             WHERE client_id = $1 AND called_at IS NULL \
             ORDER BY enqueued_at ASC, id ASC \
             LIMIT 1"
        );
        sqlx::query_as::<_, QueueEntry>(&query)
            .bind(client_id)
            .fetch_optional(executor)
            .await
    }

    /// Zero-based rank of the client registered as `registration_id` among
    /// the uncalled entries of `queue_id`, or `None` if they are not waiting
    /// there. Registration IDs are resolved within the queue's organization.
    pub async fn position(
        pool: &PgPool,
        queue_id: DbId,
        registration_id: &str,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT ranked.rank FROM ( \
                 SELECT c.registration_id, \
                        ROW_NUMBER() OVER (ORDER BY qe.enqueued_at ASC, qe.id ASC) - 1 AS rank \
                 FROM queue_entries qe \
                 JOIN queues q ON q.id = qe.queue_id \
                 JOIN clients c ON c.id = qe.client_id AND c.organization_id = q.organization_id \
                 WHERE qe.queue_id = $1 AND qe.called_at IS NULL \
             ) ranked \
             WHERE ranked.registration_id = $2 \
             ORDER BY ranked.rank \
             LIMIT 1",
        )
        .bind(queue_id)
        .bind(registration_id)
        .fetch_optional(pool)
        .await
    }

    /// Where the client registered as `registration_id` waits among the
    /// queues of `service_id`, with their zero-based rank.
    pub async fn placement_in_service(
        pool: &PgPool,
        service_id: DbId,
        registration_id: &str,
    ) -> Result<Option<PlacementRow>, sqlx::Error> {
        sqlx::query_as::<_, PlacementRow>(
            "SELECT ranked.queue_id, ranked.queue_name, ranked.rank FROM ( \
                 SELECT qe.queue_id, q.name AS queue_name, c.registration_id, qe.enqueued_at, \
                        ROW_NUMBER() OVER ( \
                            PARTITION BY qe.queue_id ORDER BY qe.enqueued_at ASC, qe.id ASC \
                        ) - 1 AS rank \
                 FROM queue_entries qe \
                 JOIN queues q ON q.id = qe.queue_id \
                 JOIN clients c ON c.id = qe.client_id AND c.organization_id = q.organization_id \
                 WHERE q.service_id = $1 AND qe.called_at IS NULL \
             ) ranked \
             WHERE ranked.registration_id = $2 \
             ORDER BY ranked.enqueued_at ASC \
             LIMIT 1",
        )
        .bind(service_id)
        .bind(registration_id)
        .fetch_optional(pool)
        .await
    }

    /// Where the client currently waits (their earliest uncalled entry in any
    /// queue), with their zero-based rank in that queue.
    pub async fn placement_of_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Option<PlacementRow>, sqlx::Error> {
        sqlx::query_as::<_, PlacementRow>(
            "SELECT ranked.queue_id, ranked.queue_name, ranked.rank FROM ( \
                 SELECT qe.queue_id, q.name AS queue_name, qe.client_id, qe.enqueued_at, \
                        ROW_NUMBER() OVER ( \
                            PARTITION BY qe.queue_id ORDER BY qe.enqueued_at ASC, qe.id ASC \
                        ) - 1 AS rank \
                 FROM queue_entries qe \
                 JOIN queues q ON q.id = qe.queue_id \
                 WHERE qe.called_at IS NULL \
                   AND qe.queue_id IN ( \
                       SELECT queue_id FROM queue_entries \
                       WHERE client_id = $1 AND called_at IS NULL \
                   ) \
             ) ranked \
             WHERE ranked.client_id = $1 \
             ORDER BY ranked.enqueued_at ASC \
             LIMIT 1",
        )
        .bind(client_id)
        .fetch_optional(pool)
        .await
    }

    /// Uncalled entries of the given queues with client identity, grouped by
    /// queue and in arrival order within each queue.
    pub async fn list_waiting_for_queues(
        pool: &PgPool,
        queue_ids: &[DbId],
    ) -> Result<Vec<WaitingClient>, sqlx::Error> {
        if queue_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, WaitingClient>(
            "SELECT qe.id AS entry_id, qe.queue_id, qe.client_id, \
                    c.registration_id, c.name AS client_name, qe.enqueued_at \
             FROM queue_entries qe \
             JOIN clients c ON c.id = qe.client_id \
             WHERE qe.queue_id = ANY($1) AND qe.called_at IS NULL \
             ORDER BY qe.queue_id ASC, qe.enqueued_at ASC, qe.id ASC",
        )
        .bind(queue_ids)
        .fetch_all(pool)
        .await
    }

    /// Call the earliest waiting entry of a queue (no attendant recorded).
    ///
    /// Uses `SELECT FOR UPDATE SKIP LOCKED` so concurrent callers never claim
    /// the same row: a row locked by another claim is skipped, and a row
    /// claimed since the statement's snapshot fails the `called_at IS NULL`
    /// recheck.
    pub async fn claim_next_in_queue(
        pool: &PgPool,
        queue_id: DbId,
    ) -> Result<Option<QueueEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE queue_entries \
             SET called_at = NOW() \
             WHERE id = ( \
                 SELECT id FROM queue_entries \
                 WHERE queue_id = $1 AND called_at IS NULL \
                 ORDER BY enqueued_at ASC, id ASC \
                 LIMIT 1 \
                 FOR UPDATE SKIP LOCKED \
             ) \
             AND called_at IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueueEntry>(&query)
            .bind(queue_id)
            .fetch_optional(pool)
            .await
    }

    /// Call exactly the entry a desk selected, on behalf of an attendant.
    ///
    /// Returns `None` without waiting if the entry is already called or is
    /// being claimed by another desk right now; the caller moves on to its
    /// next candidate.
    pub async fn claim_entry(
        pool: &PgPool,
        entry_id: DbId,
        attendant_id: Option<DbId>,
    ) -> Result<Option<QueueEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE queue_entries \
             SET called_at = NOW(), attended_by = $2 \
             WHERE id = ( \
                 SELECT id FROM queue_entries \
                 WHERE id = $1 AND called_at IS NULL \
                 FOR UPDATE SKIP LOCKED \
             ) \
             AND called_at IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueueEntry>(&query)
            .bind(entry_id)
            .bind(attendant_id)
            .fetch_optional(pool)
            .await
    }

    /// Most recent entry called by the desk's attendant in any of the desk's
    /// services.
    pub async fn last_served_at_desk(
        pool: &PgPool,
        desk_id: DbId,
    ) -> Result<Option<ServedClient>, sqlx::Error> {
        let query = format!(
            "SELECT {SERVED_COLUMNS} \
             FROM queue_entries qe \
             JOIN queues q ON q.id = qe.queue_id \
             JOIN clients c ON c.id = qe.client_id \
             JOIN desk_services ds ON ds.service_id = q.service_id \
             JOIN desks d ON d.id = ds.desk_id \
             WHERE ds.desk_id = $1 \
               AND qe.called_at IS NOT NULL \
               AND qe.attended_by = d.attendant_id \
             ORDER BY qe.called_at DESC, qe.id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, ServedClient>(&query)
            .bind(desk_id)
            .fetch_optional(pool)
            .await
    }

    /// Load an entry with its client and queue names.
    pub async fn find_served(
        pool: &PgPool,
        entry_id: DbId,
    ) -> Result<Option<ServedClient>, sqlx::Error> {
        let query = format!(
            "SELECT {SERVED_COLUMNS} \
             FROM queue_entries qe \
             JOIN queues q ON q.id = qe.queue_id \
             JOIN clients c ON c.id = qe.client_id \
             WHERE qe.id = $1"
        );
        sqlx::query_as::<_, ServedClient>(&query)
            .bind(entry_id)
            .fetch_optional(pool)
            .await
    }
}
