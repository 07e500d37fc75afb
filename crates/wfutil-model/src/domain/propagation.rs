use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// How dependents of a deleted object are handled.
///
/// - `Background`: the object is removed at once, dependents are collected afterwards.
/// - `Orphan`: dependents are left in place without an owner.
/// - `Foreground`: the object is removed only after all blocking dependents are gone.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropagationPolicy {
    #[default]
    Background,
    Orphan,
    Foreground,
}

impl PropagationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropagationPolicy::Background => "Background",
            PropagationPolicy::Orphan => "Orphan",
            PropagationPolicy::Foreground => "Foreground",
        }
    }
}

impl FromStr for PropagationPolicy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "background" => Ok(PropagationPolicy::Background),
            "orphan" => Ok(PropagationPolicy::Orphan),
            "foreground" => Ok(PropagationPolicy::Foreground),
            _ => Err(ModelError::UnknownPropagation(s.to_string())),
        }
    }
}

impl fmt::Display for PropagationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
