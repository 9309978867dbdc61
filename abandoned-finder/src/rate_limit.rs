//! Rate limiting for GitHub API calls.
//!
//! Two mechanisms keep the finder under GitHub's quotas: a proactive check of
//! the remaining quota before a burst of requests, and a fixed pause after
//! every analyzed candidate.

mod info;

pub use info::RateLimitInfo;

use crate::client::{GitHubApi, RateResource};
use std::time::Duration;
use tracing::{info, warn};

/// Maximum time to wait for rate limit reset (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining requests before proactively waiting.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Default pause after each analyzed candidate.
pub const DEFAULT_CANDIDATE_PAUSE: Duration = Duration::from_millis(500);

/// Returns how long to wait before issuing more requests, if at all.
///
/// A wait is needed only when fewer than `MIN_REMAINING_THRESHOLD` requests
/// remain and the reset lies in the future. The wait is capped at one hour.
pub fn required_wait(info: &RateLimitInfo, now_secs: u64) -> Option<Duration> {
    if info.remaining >= MIN_REMAINING_THRESHOLD {
        return None;
    }

    let wait_secs = info.seconds_until_reset(now_secs)?;
    if wait_secs > MAX_WAIT_SECS {
        warn!(
            wait_secs,
            max_wait = MAX_WAIT_SECS,
            "Rate limit reset too far in future, capping wait time"
        );
    }

    Some(Duration::from_secs(wait_secs.min(MAX_WAIT_SECS)))
}

/// Waits if the rate limit is low, returning true if we waited.
pub async fn wait_if_needed(info: &RateLimitInfo) -> bool {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(wait) = required_wait(info, now) else {
        return false;
    };

    info!(
        remaining = info.remaining,
        wait_secs = wait.as_secs(),
        "Rate limit low, waiting for reset"
    );
    tokio::time::sleep(wait).await;
    true
}

/// Checks the quota for `resource` and waits for a reset when it runs low.
///
/// A failed quota check is logged and otherwise ignored; the caller proceeds
/// as if quota were available.
pub async fn ensure_rate_limit<A>(api: &A, resource: RateResource) -> bool
where
    A: GitHubApi + ?Sized,
{
    match api.rate_limit(resource).await {
        Ok(info) => wait_if_needed(&info).await,
        Err(e) => {
            warn!(?resource, error = %e, "Failed to check rate limit, continuing");
            false
        }
    }
}

/// Sleeps for the inter-candidate pause. A zero pause returns immediately.
pub async fn pause_between_candidates(pause: Duration) {
    if !pause.is_zero() {
        tokio::time::sleep(pause).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;

    #[test]
    fn no_wait_with_plenty_remaining() {
        let info = RateLimitInfo {
            remaining: 100,
            reset: u64::MAX,
            limit: 1000,
        };

        assert_eq!(required_wait(&info, 0), None);
    }

    #[test]
    fn no_wait_when_reset_passed() {
        let info = RateLimitInfo {
            remaining: 1,
            reset: 100,
            limit: 30,
        };

        assert_eq!(required_wait(&info, 200), None);
    }

    #[test]
    fn waits_until_reset_when_low() {
        let info = RateLimitInfo {
            remaining: 2,
            reset: 1_060,
            limit: 30,
        };

        assert_eq!(required_wait(&info, 1_000), Some(Duration::from_secs(60)));
    }

    #[test]
    fn wait_is_capped_at_one_hour() {
        let info = RateLimitInfo {
            remaining: 0,
            reset: 100_000,
            limit: 30,
        };

        assert_eq!(
            required_wait(&info, 0),
            Some(Duration::from_secs(MAX_WAIT_SECS))
        );
    }

    #[tokio::test]
    async fn wait_if_needed_reset_passed() {
        let info = RateLimitInfo {
            remaining: 1,
            reset: 0,
            limit: 30,
        };

        assert!(!wait_if_needed(&info).await);
    }

    #[tokio::test]
    async fn failed_rate_limit_check_does_not_block() {
        let api = FakeApi::new().with_rate_limit_failure();
        assert!(!ensure_rate_limit(&api, RateResource::Search).await);
    }

    #[tokio::test]
    async fn healthy_quota_does_not_wait() {
        let api = FakeApi::new();
        assert!(!ensure_rate_limit(&api, RateResource::Core).await);
    }
}
