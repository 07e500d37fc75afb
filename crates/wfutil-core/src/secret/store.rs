use std::collections::BTreeMap;

use async_trait::async_trait;

use super::StoreError;

/// Secret object as returned by the backing store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretObject {
    pub data: BTreeMap<String, Vec<u8>>,
}

impl SecretObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one data entry.
    ///
    /// Returns `self` for chaining.
    pub fn with_entry<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.data.get(key).map(Vec::as_slice)
    }
}

/// Point lookup of secret objects.
///
/// Implementations wrap a cluster API client or any other key-value backend.
/// They must map their native failures onto [`StoreError`] so that callers can classify them.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get(&self, namespace: &str, name: &str) -> Result<SecretObject, StoreError>;
}
