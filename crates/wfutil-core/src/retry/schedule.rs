use std::time::Duration;

use taskvisor::{BackoffPolicy, JitterPolicy};
use wfutil_model::BackoffStrategy;

use crate::map::to_backoff_policy;

/// Delays between consecutive attempts of one [`super::retry`] call.
///
/// Growth follows [`BackoffPolicy::next`] on the un-jittered delay, so full or
/// equal jitter drawing a short wait does not shrink the waits after it.
/// Decorrelated jitter feeds on the previous sampled delay instead.
#[derive(Debug, Clone)]
pub struct Schedule {
    policy: BackoffPolicy,
    base: Option<Duration>,
    prev: Option<Duration>,
}

impl Schedule {
    pub fn new(strategy: &BackoffStrategy) -> Self {
        Self {
            policy: to_backoff_policy(strategy),
            base: None,
            prev: None,
        }
    }

    pub fn next_delay(&mut self) -> Duration {
        let base = self.next_base();
        self.base = Some(base);

        let delay = match self.policy.jitter {
            JitterPolicy::Decorrelated => {
                let first = self.policy.first.min(self.policy.max);
                self.policy.jitter.apply_decorrelated(
                    first,
                    self.prev.unwrap_or(first),
                    self.policy.max,
                )
            }
            jitter => jitter.apply(base),
        };
        self.prev = Some(delay);
        delay
    }

    fn next_base(&self) -> Duration {
        let max = self.policy.max;
        match self.base {
            // Already at the cap: growing again could overflow `Duration`.
            Some(prev) if prev.as_secs_f64() * self.policy.factor >= max.as_secs_f64() => max,
            prev => BackoffPolicy {
                jitter: JitterPolicy::None,
                ..self.policy
            }
            .next(prev),
        }
    }
}
