use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Delay schedule used between retry attempts.
///
/// `steps` bounds the total number of invocations, not the number of sleeps:
/// a schedule with `steps = 5` performs at most five calls and four waits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackoffStrategy {
    pub jitter: super::JitterStrategy,
    pub first_ms: u64,
    pub max_ms: u64,
    pub factor: f64,
    pub steps: u32,
}

impl Default for BackoffStrategy {
    fn default() -> Self {
        Self {
            jitter: super::JitterStrategy::Equal,
            first_ms: 10,
            max_ms: 1_000,
            factor: 1.0,
            steps: 5,
        }
    }
}

impl BackoffStrategy {
    /// Schedule without any waiting between attempts.
    pub fn immediate(steps: u32) -> Self {
        Self {
            jitter: super::JitterStrategy::None,
            first_ms: 0,
            max_ms: 0,
            factor: 1.0,
            steps,
        }
    }

    /// Maximum number of invocations, never less than one.
    pub fn max_attempts(&self) -> u32 {
        self.steps.max(1)
    }

    /// Rejects schedules the retrier cannot honor.
    ///
    /// Rules:
    /// - `factor` is finite and `>= 1.0` (delays never shrink).
    /// - `max_ms >= first_ms`.
    pub fn validate(&self) -> ModelResult<()> {
        if !self.factor.is_finite() || self.factor < 1.0 {
            return Err(ModelError::Invalid(format!(
                "backoff factor must be a finite value >= 1.0, got {}",
                self.factor
            )));
        }
        if self.max_ms < self.first_ms {
            return Err(ModelError::Invalid(format!(
                "backoff maxMs ({}) is lower than firstMs ({})",
                self.max_ms, self.first_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JitterStrategy;

    #[test]
    fn default_is_short_bounded_schedule() {
        let b = BackoffStrategy::default();
        assert_eq!(b.steps, 5);
        assert_eq!(b.first_ms, 10);
        assert_eq!(b.factor, 1.0);
        assert_eq!(b.jitter, JitterStrategy::Equal);
        assert!(b.validate().is_ok());
    }

    #[test]
    fn zero_steps_still_allows_one_attempt() {
        assert_eq!(BackoffStrategy::immediate(0).max_attempts(), 1);
        assert_eq!(BackoffStrategy::immediate(3).max_attempts(), 3);
    }

    #[test]
    fn validate_rejects_shrinking_factor() {
        let b = BackoffStrategy {
            factor: 0.5,
            ..Default::default()
        };
        assert!(matches!(b.validate(), Err(ModelError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_cap_below_first() {
        let b = BackoffStrategy {
            first_ms: 500,
            max_ms: 100,
            ..Default::default()
        };
        assert!(b.validate().is_err());
    }

    #[test]
    fn serde_partial_input_uses_defaults() {
        let b: BackoffStrategy = serde_json::from_str(r#"{"steps": 3, "jitter": "none"}"#).unwrap();
        assert_eq!(b.steps, 3);
        assert_eq!(b.jitter, JitterStrategy::None);
        assert_eq!(b.first_ms, 10);
        assert_eq!(b.max_ms, 1_000);
    }
}
