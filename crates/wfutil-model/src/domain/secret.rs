use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a single field of a remote secret object.
///
/// `namespace` + `name` identify the object, `key` identifies one entry of its data.
/// All three are opaque to this layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretRef {
    pub namespace: String,
    pub name: String,
    pub key: String,
}

impl SecretRef {
    pub fn new<N, M, K>(namespace: N, name: M, key: K) -> Self
    where
        N: Into<String>,
        M: Into<String>,
        K: Into<String>,
    {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}[{}]", self.namespace, self.name, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::SecretRef;

    #[test]
    fn display_names_object_and_key() {
        let r = SecretRef::new("argo", "s3-creds", "accessKey");
        assert_eq!(r.to_string(), "argo/s3-creds[accessKey]");
    }

    #[test]
    fn serde_roundtrip_json() {
        let r = SecretRef::new("ns", "name", "key");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"namespace":"ns","name":"name","key":"key"}"#);

        let back: SecretRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
