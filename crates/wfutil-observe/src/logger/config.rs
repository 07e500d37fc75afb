use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::{
    error::LoggerResult,
    object::{LoggerFormat, LoggerLevel},
};

/// Environment variable overriding [`LoggerConfig::format`].
pub const ENV_LOG_FORMAT: &str = "WFUTIL_LOG_FORMAT";

/// Environment variable overriding [`LoggerConfig::level`].
pub const ENV_LOG_LEVEL: &str = "WFUTIL_LOG_LEVEL";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression (e.g. `"info"`, `"wfutil_core=debug,info"`).
    pub level: LoggerLevel,
    /// Include targets (module paths) in the output.
    pub with_targets: bool,
    /// Colored output; only honored when stdout is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Apply overrides from an environment-like lookup.
    ///
    /// Unset or empty variables leave the current value untouched.
    pub fn with_overrides<F>(mut self, lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(format) = get(ENV_LOG_FORMAT) {
            self.format = format.parse()?;
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.level = level.parse()?;
        }
        Ok(self)
    }

    /// Default configuration with overrides from the process environment.
    pub fn from_env() -> LoggerResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
