//! Service entity model.

use serde::Serialize;
use sqlx::FromRow;
use waitline_core::service_window::WindowMode;
use waitline_core::types::{DbId, Timestamp};

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub organization_id: DbId,
    pub name: String,
    pub opens_at: Timestamp,
    pub closes_at: Timestamp,
    pub guest_enrollment: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Service {
    /// Whether the service accepts clients at `now` under `mode`.
    pub fn is_open(&self, mode: WindowMode, now: Timestamp) -> bool {
        mode.is_open(self.opens_at, self.closes_at, now)
    }
}
