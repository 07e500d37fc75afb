use std::{fmt, sync::Arc};

use tokio_util::sync::CancellationToken;
use tracing::{instrument, trace, warn};
use wfutil_model::{BackoffStrategy, SecretRef};

use super::{SecretStore, StoreError};
use crate::{
    error::{CoreError, CoreResult},
    retry::{Classification, RetryError, retry},
};

/// Retry verdict function applied to store failures.
pub type Classifier = Arc<dyn Fn(&StoreError) -> Classification + Send + Sync>;

/// Reads single secret fields through a [`SecretStore`], retrying transient store failures.
///
/// Every call performs a fresh lookup; values are never cached.
#[derive(Clone)]
pub struct SecretAccessor {
    store: Arc<dyn SecretStore>,
    backoff: BackoffStrategy,
    classify: Classifier,
}

impl SecretAccessor {
    /// Create an accessor using [`StoreError::classify`] as the retry verdict.
    pub fn new(store: Arc<dyn SecretStore>, backoff: BackoffStrategy) -> Self {
        Self {
            store,
            backoff,
            classify: Arc::new(StoreError::classify),
        }
    }

    /// Replace the retry verdict function.
    pub fn with_classifier<F>(mut self, classify: F) -> Self
    where
        F: Fn(&StoreError) -> Classification + Send + Sync + 'static,
    {
        self.classify = Arc::new(classify);
        self
    }

    /// Fetch the value stored under `key` in secret `namespace/name`.
    ///
    /// Errors:
    /// - [`CoreError::Store`]: the store failed permanently (returned unwrapped).
    /// - [`CoreError::Internal`]: transient failures used up the retry budget.
    /// - [`CoreError::Cancelled`]: `cancel` fired before a value was obtained.
    /// - [`CoreError::BadRequest`]: the secret exists but has no `key` entry.
    #[instrument(level = "debug", skip(self, cancel))]
    pub async fn get_secret(
        &self,
        cancel: &CancellationToken,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> CoreResult<Vec<u8>> {
        let store = &self.store;
        let secret = retry(
            cancel,
            &self.backoff,
            |e: &StoreError| (self.classify)(e),
            move || async move {
                let res = store.get(namespace, name).await;
                if let Err(e) = &res {
                    warn!(secret = name, error = %e, "failed to get secret");
                }
                res
            },
        )
        .await
        .map_err(|e| match e {
            RetryError::Permanent(err) => CoreError::Store(err),
            RetryError::Exhausted { attempts, last } => CoreError::Internal {
                message: format!("failed to get secret '{name}' after {attempts} attempts"),
                source: last,
            },
            RetryError::Cancelled => CoreError::Cancelled,
        })?;

        match secret.get(key) {
            Some(value) => {
                trace!(len = value.len(), "secret key resolved");
                Ok(value.to_vec())
            }
            None => Err(CoreError::BadRequest(format!(
                "secret '{name}' does not have the key '{key}'"
            ))),
        }
    }

    /// Same as [`SecretAccessor::get_secret`] for a [`SecretRef`].
    pub async fn get(&self, cancel: &CancellationToken, secret: &SecretRef) -> CoreResult<Vec<u8>> {
        self.get_secret(cancel, &secret.namespace, &secret.name, &secret.key)
            .await
    }
}

impl fmt::Debug for SecretAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretAccessor")
            .field("store", &"<store>")
            .field("backoff", &self.backoff)
            .field("classify", &"<fn>")
            .finish()
    }
}
