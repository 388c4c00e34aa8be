//! Queue entry model and waiting-line views.

use serde::Serialize;
use sqlx::FromRow;
use waitline_core::dispatch::WaitingEntry;
use waitline_core::position::Placement;
use waitline_core::types::{DbId, Timestamp};

/// A row from the `queue_entries` table.
///
/// `called_at` / `attended_by` are set exactly once, when the entry is
/// claimed by a desk or by a plain queue call.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QueueEntry {
    pub id: DbId,
    pub client_id: DbId,
    pub queue_id: DbId,
    pub enqueued_at: Timestamp,
    pub called_at: Option<Timestamp>,
    pub attended_by: Option<DbId>,
}

/// An uncalled entry joined with the waiting client's identity.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WaitingClient {
    pub entry_id: DbId,
    pub queue_id: DbId,
    pub client_id: DbId,
    pub registration_id: String,
    pub client_name: String,
    pub enqueued_at: Timestamp,
}

impl From<&WaitingClient> for WaitingEntry {
    fn from(w: &WaitingClient) -> Self {
        WaitingEntry {
            entry_id: w.entry_id,
            client_id: w.client_id,
            enqueued_at: w.enqueued_at,
        }
    }
}

/// A called entry with the client and queue it belongs to.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServedClient {
    pub entry_id: DbId,
    pub queue_id: DbId,
    pub queue_name: String,
    pub client_id: DbId,
    pub registration_id: String,
    pub client_name: String,
    pub enqueued_at: Timestamp,
    pub called_at: Option<Timestamp>,
    pub attended_by: Option<DbId>,
}

/// Raw ranking row used to build a [`Placement`].
#[derive(Debug, Clone, FromRow)]
pub struct PlacementRow {
    pub queue_id: DbId,
    pub queue_name: String,
    pub rank: i64,
}

impl From<PlacementRow> for Placement {
    fn from(row: PlacementRow) -> Self {
        Placement {
            queue_id: row.queue_id,
            queue_name: row.queue_name,
            rank: Some(row.rank),
        }
    }
}
