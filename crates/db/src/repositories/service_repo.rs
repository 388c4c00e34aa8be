//! Repository for the `services` table.

use sqlx::PgPool;
use waitline_core::types::DbId;

use crate::models::service::Service;

/// Column list for `services` queries.
const COLUMNS: &str = "id, organization_id, name, opens_at, closes_at, guest_enrollment, \
    created_at, updated_at";

/// Read access to services and their desk assignments.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Find a service by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a service by ID, only if it belongs to `organization_id`.
    pub async fn find_in_organization(
        pool: &PgPool,
        organization_id: DbId,
        id: DbId,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM services WHERE id = $1 AND organization_id = $2");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(organization_id)
            .fetch_optional(pool)
            .await
    }

    /// List the services assigned to a desk, ordered by ID.
    pub async fn list_by_desk(pool: &PgPool, desk_id: DbId) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services \
             WHERE id IN (SELECT service_id FROM desk_services WHERE desk_id = $1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(desk_id)
            .fetch_all(pool)
            .await
    }
}
