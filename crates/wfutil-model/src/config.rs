use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    BackoffStrategy, DEFAULT_TERMINATION_LOG, ENV_DEL_PROPAGATION_POLICY, ModelResult,
    PropagationPolicy,
};

/// Process-level settings of the utility layer.
///
/// Built once at startup and handed to the components that need it,
/// instead of each of them consulting the environment on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UtilConfig {
    /// Retry schedule for remote lookups.
    pub retry: BackoffStrategy,
    /// Deletion propagation policy for owned resources.
    pub propagation: PropagationPolicy,
    /// Where the termination message is written.
    pub termination_log: PathBuf,
}

impl Default for UtilConfig {
    fn default() -> Self {
        Self {
            retry: BackoffStrategy::default(),
            propagation: PropagationPolicy::default(),
            termination_log: PathBuf::from(DEFAULT_TERMINATION_LOG),
        }
    }
}

impl UtilConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> ModelResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty `WF_DEL_PROPAGATION_POLICY` keeps [`PropagationPolicy::Background`].
    pub fn from_lookup<F>(lookup: F) -> ModelResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_DEL_PROPAGATION_POLICY) {
            cfg.propagation = raw.parse()?;
        }
        cfg.retry.validate()?;
        Ok(cfg)
    }
}
