//! Repository for group membership (`client_groups`) and queue eligibility
//! (`queue_groups`).

use sqlx::PgPool;
use waitline_core::types::DbId;

/// The group membership index.
pub struct GroupRepo;

impl GroupRepo {
    /// IDs of every group the client belongs to.
    pub async fn group_ids_of_client<'e, E>(
        executor: E,
        client_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, DbId>(
            "SELECT group_id FROM client_groups WHERE client_id = $1 ORDER BY group_id",
        )
        .bind(client_id)
        .fetch_all(executor)
        .await
    }

    /// IDs of the groups attached to a queue (its eligibility list).
    pub async fn group_ids_for_queue(
        pool: &PgPool,
        queue_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT group_id FROM queue_groups WHERE queue_id = $1 ORDER BY group_id",
        )
        .bind(queue_id)
        .fetch_all(pool)
        .await
    }
}
