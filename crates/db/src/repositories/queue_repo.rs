//! Repository for the `queues` table (the queue catalog).
//!
//! Queues are created by admin flows elsewhere; this service only reads them.

use sqlx::PgPool;
use waitline_core::types::DbId;

use crate::models::queue::Queue;

/// Column list for `queues` queries.
const COLUMNS: &str = "id, organization_id, service_id, name, priority, created_at, updated_at";

/// Read access to the queue catalog.
pub struct QueueRepo;

impl QueueRepo {
    /// Find a queue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Queue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM queues WHERE id = $1");
        sqlx::query_as::<_, Queue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a queue by ID, only if it belongs to `organization_id`.
    pub async fn find_in_organization(
        pool: &PgPool,
        organization_id: DbId,
        id: DbId,
    ) -> Result<Option<Queue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM queues WHERE id = $1 AND organization_id = $2");
        sqlx::query_as::<_, Queue>(&query)
            .bind(id)
            .bind(organization_id)
            .fetch_optional(pool)
            .await
    }

    /// List the queues of the given services in serving order
    /// (priority ascending, then ID).
    pub async fn list_by_services(
        pool: &PgPool,
        service_ids: &[DbId],
    ) -> Result<Vec<Queue>, sqlx::Error> {
        if service_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM queues \
             WHERE service_id = ANY($1) \
             ORDER BY priority ASC, id ASC"
        );
        sqlx::query_as::<_, Queue>(&query)
            .bind(service_ids)
            .fetch_all(pool)
            .await
    }

    /// List every queue attached to at least one of `group_ids`, across all
    /// services, in serving order.
    pub async fn list_for_groups<'e, E>(
        executor: E,
        group_ids: &[DbId],
    ) -> Result<Vec<Queue>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM queues \
             WHERE id IN (SELECT queue_id FROM queue_groups WHERE group_id = ANY($1)) \
             ORDER BY priority ASC, id ASC"
        );
        sqlx::query_as::<_, Queue>(&query)
            .bind(group_ids)
            .fetch_all(executor)
            .await
    }
}
