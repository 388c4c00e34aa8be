//! Desk entity model and the desk detail projection.

use serde::Serialize;
use sqlx::FromRow;
use waitline_core::types::{DbId, Timestamp};

use super::queue::Queue;
use super::queue_entry::WaitingClient;
use super::service::Service;

/// A row from the `desks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Desk {
    pub id: DbId,
    pub organization_id: DbId,
    pub name: String,
    pub attendant_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A queue with its current waiting line, in arrival order.
#[derive(Debug, Clone, Serialize)]
pub struct QueueLine {
    #[serde(flatten)]
    pub queue: Queue,
    pub waiting: Vec<WaitingClient>,
}

/// A service assigned to a desk, with its queues ordered by priority.
#[derive(Debug, Clone, Serialize)]
pub struct DeskService {
    #[serde(flatten)]
    pub service: Service,
    pub queues: Vec<QueueLine>,
}

/// Everything a desk screen shows: the desk, its services, their queues, and
/// who is waiting in each.
#[derive(Debug, Clone, Serialize)]
pub struct DeskDetail {
    #[serde(flatten)]
    pub desk: Desk,
    pub services: Vec<DeskService>,
}
