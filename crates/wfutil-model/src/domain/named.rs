use serde::{Deserialize, Serialize};

/// Anything identified by a name inside an argument list.
///
/// Merging of parameter and artifact lists deduplicates on this name.
pub trait Named {
    fn name(&self) -> &str;
}

/// Named input or output value of a workflow step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Parameter {
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            value: Some(value.into()),
            default: None,
        }
    }
}

impl Named for Parameter {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Named file or directory passed between workflow steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub name: String,
    /// Location inside the step container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Reference to the output this artifact is taken from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl Artifact {
    pub fn new<N, P>(name: N, path: P) -> Self
    where
        N: Into<String>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            path: Some(path.into()),
            from: None,
        }
    }
}

impl Named for Artifact {
    fn name(&self) -> &str {
        &self.name
    }
}
