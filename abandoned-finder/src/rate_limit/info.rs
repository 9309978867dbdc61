//! Rate limit information.

/// Rate limit information for a specific resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Seconds until the window resets, or `None` if it already has.
    pub fn seconds_until_reset(&self, now_secs: u64) -> Option<u64> {
        self.reset.checked_sub(now_secs).filter(|secs| *secs > 0)
    }
}
