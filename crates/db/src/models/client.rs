//! Client entity model.

use serde::Serialize;
use sqlx::FromRow;
use waitline_core::types::{DbId, Timestamp};

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub organization_id: DbId,
    /// The organization's own identifier for this person (unique per org).
    pub registration_id: String,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
