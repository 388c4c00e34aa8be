//! Priority-tier selection for desk dispatch.
//!
//! A desk may cover several open services, each owning several queues. The
//! next client is chosen by:
//!
//! 1. taking the lowest `priority` value among the remaining queues (the tier),
//! 2. picking the earliest waiting entry across every queue of that tier,
//! 3. dropping the whole tier and retrying with the rest when it is empty.
//!
//! Smaller priority numbers are served first.

use serde::Serialize;

use crate::types::{DbId, Priority, Timestamp};

/// An uncalled entry waiting in a candidate queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingEntry {
    pub entry_id: DbId,
    pub client_id: DbId,
    pub enqueued_at: Timestamp,
}

/// A queue considered for dispatch, with its waiting line.
#[derive(Debug, Clone)]
pub struct QueueCandidate {
    pub queue_id: DbId,
    pub priority: Priority,
    pub waiting: Vec<WaitingEntry>,
}

/// The entry chosen for a desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub queue_id: DbId,
    pub client_id: DbId,
    pub entry_id: DbId,
}

/// The flattened set of queues a desk can currently serve from.
#[derive(Debug, Clone, Default)]
pub struct DispatchCandidates {
    queues: Vec<QueueCandidate>,
}

impl DispatchCandidates {
    pub fn new(queues: Vec<QueueCandidate>) -> Self {
        Self { queues }
    }

    /// Distinct priority values in serving order.
    pub fn tiers(&self) -> Vec<Priority> {
        let mut tiers: Vec<Priority> = self.queues.iter().map(|q| q.priority).collect();
        tiers.sort_unstable();
        tiers.dedup();
        tiers
    }

    /// Earliest waiting entry across all queues sharing `priority`.
    ///
    /// Ties on `enqueued_at` fall back to the entry id, which follows
    /// insertion order.
    pub fn select_in_tier(&self, priority: Priority) -> Option<Selection> {
        self.queues
            .iter()
            .filter(|q| q.priority == priority)
            .flat_map(|q| q.waiting.iter().map(move |e| (q.queue_id, e)))
            .min_by_key(|(_, e)| (e.enqueued_at, e.entry_id))
            .map(|(queue_id, e)| Selection {
                queue_id,
                client_id: e.client_id,
                entry_id: e.entry_id,
            })
    }

    /// Select the next client to serve, falling through empty tiers.
    ///
    /// Returns `None` when every tier is empty (an idle desk).
    pub fn select_next(&self) -> Option<Selection> {
        let mut remaining: Vec<&QueueCandidate> = self.queues.iter().collect();

        while let Some(tier) = remaining.iter().map(|q| q.priority).min() {
            if let Some(selection) = self.select_in_tier(tier) {
                return Some(selection);
            }
            remaining.retain(|q| q.priority != tier);
        }

        None
    }

    /// Remove an entry that can no longer be claimed (another desk won it).
    ///
    /// Returns `true` if the entry was present.
    pub fn discard(&mut self, entry_id: DbId) -> bool {
        let mut removed = false;
        for queue in &mut self.queues {
            let before = queue.waiting.len();
            queue.waiting.retain(|e| e.entry_id != entry_id);
            removed |= queue.waiting.len() != before;
        }
        removed
    }

    /// Total number of waiting entries across all candidate queues.
    pub fn waiting_count(&self) -> usize {
        self.queues.iter().map(|q| q.waiting.len()).sum()
    }
}
