use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};

/// Controls how random jitter is applied to retry delays.
///
/// Jitter spreads retries of concurrent callers over time so that a store hiccup
/// does not turn into a synchronized wave of lookups once it recovers.
///
/// Strategies:
/// - `None`: No jitter. Delays are deterministic.
/// - `Full`: Full jitter, picks a random delay in `[0, base]`.
/// - `Equal`: Equal jitter, picks a delay in `[base/2, base]`.
/// - `Decorrelated`: Decorrelated jitter, picks a delay in `[first, prev * 3]`, capped by `max`.
///
/// The math lives in the retry subsystem. This enum only names the policy.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JitterStrategy {
    /// No randomness applied.
    None,
    /// Delay is uniformly sampled from `[0, base]`.
    Full,
    /// Delay is sampled from the upper half of `[0, base]`.
    #[default]
    Equal,
    /// Delay is sampled from `[first, prev * 3]` and capped by the strategy maximum.
    Decorrelated,
}

impl FromStr for JitterStrategy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equal" => Ok(JitterStrategy::Equal),
            "" | "none" => Ok(JitterStrategy::None),
            "full" | "default" => Ok(JitterStrategy::Full),
            "decorrelated" => Ok(JitterStrategy::Decorrelated),
            other => Err(ModelError::UnknownJitter(other.to_string())),
        }
    }
}
