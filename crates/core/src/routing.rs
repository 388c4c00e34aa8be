//! Target-queue resolution for clients entering a service.
//!
//! The repository layer supplies every queue reachable through the client's
//! groups; this module narrows them to the requested service and picks one.

use crate::types::{DbId, Priority};

/// A queue reachable through one of the client's groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCandidate {
    pub queue_id: DbId,
    pub organization_id: DbId,
    pub service_id: DbId,
    pub priority: Priority,
}

/// Pick the queue a client entering `service_id` should join.
///
/// Candidates outside the service or organization are ignored. The lowest
/// priority number wins; equal priorities resolve to the lowest queue id so
/// repeated calls always agree.
pub fn choose_target_queue(
    candidates: &[RouteCandidate],
    organization_id: DbId,
    service_id: DbId,
) -> Option<&RouteCandidate> {
    candidates
        .iter()
        .filter(|c| c.service_id == service_id && c.organization_id == organization_id)
        .min_by_key(|c| (c.priority, c.queue_id))
}

/// Whether a client in `client_groups` may join a queue open to
/// `queue_groups`. A queue with no attached groups admits nobody.
pub fn shares_group(client_groups: &[DbId], queue_groups: &[DbId]) -> bool {
    client_groups.iter().any(|g| queue_groups.contains(g))
}
