//! Service opening-window semantics.
//!
//! A service carries `opens_at` / `closes_at` timestamps. Two readings of
//! that window are in use:
//!
//! - [`WindowMode::Absolute`]: the full date-times bound a single interval.
//! - [`WindowMode::Daily`]: only the time of day matters, so the window
//!   recurs every day regardless of the stored calendar date.
//!
//! Callers choose the mode per call path; see `ServerConfig` in the API crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// How a service window is compared against the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// `opens_at <= now <= closes_at` on full date-times.
    Absolute,
    /// Time-of-day comparison (UTC), ignoring the date.
    Daily,
}

impl WindowMode {
    /// Whether a service with the given window is open at `now`.
    ///
    /// Both bounds are inclusive. In [`WindowMode::Daily`] a window whose
    /// opening time of day is later than its closing time of day wraps past
    /// midnight (e.g. 22:00 to 02:00).
    pub fn is_open(self, opens_at: Timestamp, closes_at: Timestamp, now: Timestamp) -> bool {
        match self {
            WindowMode::Absolute => opens_at <= now && now <= closes_at,
            WindowMode::Daily => {
                let (open, close, t) = (opens_at.time(), closes_at.time(), now.time());
                if open <= close {
                    open <= t && t <= close
                } else {
                    t >= open || t <= close
                }
            }
        }
    }
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowMode::Absolute => f.write_str("absolute"),
            WindowMode::Daily => f.write_str("daily"),
        }
    }
}

impl FromStr for WindowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" => Ok(WindowMode::Absolute),
            "daily" => Ok(WindowMode::Daily),
            other => Err(format!(
                "unknown window mode '{other}' (expected 'absolute' or 'daily')"
            )),
        }
    }
}
