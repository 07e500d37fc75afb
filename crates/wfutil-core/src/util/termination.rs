use std::path::{Path, PathBuf};

use tracing::debug;
use wfutil_model::{DEFAULT_TERMINATION_LOG, UtilConfig};

use crate::error::CoreResult;

/// Destination of the container termination message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationLog {
    path: PathBuf,
}

impl Default for TerminationLog {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATION_LOG)
    }
}

impl TerminationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(cfg: &UtilConfig) -> Self {
        Self::new(cfg.termination_log.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file content with `message`.
    pub fn write(&self, message: &str) -> CoreResult<()> {
        std::fs::write(&self.path, message)?;
        debug!(path = %self.path.display(), len = message.len(), "termination message written");
        Ok(())
    }
}
