//! Repository for the `clients` table (the client directory).

use sqlx::PgPool;
use waitline_core::types::DbId;

use crate::models::client::Client;

/// Column list for `clients` queries.
const COLUMNS: &str = "id, organization_id, registration_id, name, created_at, updated_at";

/// Read access to registered clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Resolve a client by the organization's registration identifier.
    pub async fn find_by_registration_id(
        pool: &PgPool,
        organization_id: DbId,
        registration_id: &str,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients WHERE organization_id = $1 AND registration_id = $2"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(organization_id)
            .bind(registration_id)
            .fetch_optional(pool)
            .await
    }

    /// Load and row-lock a client for the rest of the current transaction.
    ///
    /// Concurrent admissions for the same client serialize on this lock.
    pub async fn lock_for_update<'e, E>(
        executor: E,
        organization_id: DbId,
        id: DbId,
    ) -> Result<Option<Client>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM clients WHERE id = $1 AND organization_id = $2 FOR UPDATE"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(organization_id)
            .fetch_optional(executor)
            .await
    }
}
