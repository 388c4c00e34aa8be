//! Queue position reporting.
//!
//! Ranks are computed zero-based by the repository layer. Anything shown to
//! a person waiting in line is 1-based.

use serde::Serialize;

use crate::types::DbId;

/// Convert a zero-based rank into the position shown to a client.
pub fn display_position(rank: i64) -> i64 {
    rank + 1
}

/// Where a client is waiting and how many people are ahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub queue_id: DbId,
    pub queue_name: String,
    /// Zero-based rank among uncalled entries; `None` if no longer waiting.
    pub rank: Option<i64>,
}

impl Placement {
    /// 1-based position, if the client is still waiting.
    pub fn position(&self) -> Option<i64> {
        self.rank.map(display_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_based() {
        assert_eq!(display_position(0), 1);
        assert_eq!(display_position(4), 5);
    }

    #[test]
    fn placement_position_follows_rank() {
        let mut p = Placement {
            queue_id: 1,
            queue_name: "Undergraduate".into(),
            rank: Some(2),
        };
        assert_eq!(p.position(), Some(3));
        p.rank = None;
        assert_eq!(p.position(), None);
    }
}
