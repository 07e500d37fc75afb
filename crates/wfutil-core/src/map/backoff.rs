use std::time::Duration;

use taskvisor::BackoffPolicy;
use wfutil_model::BackoffStrategy;

use super::to_jitter_policy;

/// Build the runtime policy for a strategy.
///
/// `max` is never below `first`, and a factor that is not finite or is below 1
/// becomes 1 (constant delay).
pub fn to_backoff_policy(s: &BackoffStrategy) -> BackoffPolicy {
    let factor = if s.factor.is_finite() && s.factor >= 1.0 {
        s.factor
    } else {
        1.0
    };
    BackoffPolicy {
        first: Duration::from_millis(s.first_ms),
        max: Duration::from_millis(s.max_ms.max(s.first_ms)),
        jitter: to_jitter_policy(s.jitter),
        factor,
    }
}
