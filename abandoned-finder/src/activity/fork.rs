//! Active fork types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A fork that is still being worked on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForkCandidate {
    /// Full fork name in "owner/name" format.
    pub full_name: String,

    /// Fork page on GitHub.
    pub html_url: String,

    /// Last push to the fork.
    pub pushed_at: DateTime<Utc>,

    /// Stargazer count of the fork.
    pub stars: u32,
}

/// What makes a fork count as active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkCriteria {
    /// Minimum stars a fork needs.
    pub min_stars: u32,

    /// A fork must have been pushed to within this many days.
    pub window_days: u32,

    /// How many of the newest forks to inspect.
    pub sample_size: u8,
}

impl Default for ForkCriteria {
    fn default() -> Self {
        Self {
            min_stars: 100,
            window_days: 180,
            sample_size: 10,
        }
    }
}

impl ForkCriteria {
    /// Sets the minimum star count.
    pub fn with_min_stars(mut self, min_stars: u32) -> Self {
        self.min_stars = min_stars;
        self
    }
}
