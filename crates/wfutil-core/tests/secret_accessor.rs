use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use wfutil_core::{
    CoreError, ErrorKind,
    retry::Classification,
    secret::{SecretAccessor, SecretObject, SecretStore, StoreError},
};
use wfutil_model::{BackoffStrategy, JitterStrategy, SecretRef};

/// Store that replays a fixed script of responses and counts lookups.
struct ScriptedStore {
    script: Mutex<VecDeque<Result<SecretObject, StoreError>>>,
    calls: AtomicUsize,
}

impl ScriptedStore {
    fn new(script: Vec<Result<SecretObject, StoreError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretStore for ScriptedStore {
    async fn get(&self, _namespace: &str, name: &str) -> Result<SecretObject, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(StoreError::NotFound { name: name.into() }))
    }
}

fn fast(steps: u32) -> BackoffStrategy {
    BackoffStrategy {
        jitter: JitterStrategy::None,
        first_ms: 1,
        max_ms: 2,
        factor: 2.0,
        steps,
    }
}

fn creds() -> SecretObject {
    SecretObject::new()
        .with_entry("accessKey", "AKIA")
        .with_entry("secretKey", b"s3cr3t".to_vec())
}

#[tokio::test]
async fn returns_value_on_first_success() {
    let store = ScriptedStore::new(vec![Ok(creds())]);
    let accessor = SecretAccessor::new(store.clone(), fast(5));

    let value = accessor
        .get_secret(&CancellationToken::new(), "argo", "s3-creds", "secretKey")
        .await
        .unwrap();

    assert_eq!(value, b"s3cr3t");
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn retries_transient_failures_then_succeeds() {
    let store = ScriptedStore::new(vec![
        Err(StoreError::ServiceUnavailable("apiserver".into())),
        Err(StoreError::Other("connection refused".into())),
        Ok(creds()),
    ]);
    let accessor = SecretAccessor::new(store.clone(), fast(5));

    let secret = SecretRef::new("argo", "s3-creds", "accessKey");
    let value = accessor.get(&CancellationToken::new(), &secret).await.unwrap();

    assert_eq!(value, b"AKIA");
    assert_eq!(store.calls(), 3);
}

#[tokio::test]
async fn permanent_failure_is_returned_unwrapped() {
    let store = ScriptedStore::new(vec![Err(StoreError::Forbidden("rbac".into())), Ok(creds())]);
    let accessor = SecretAccessor::new(store.clone(), fast(5));

    let err = accessor
        .get_secret(&CancellationToken::new(), "argo", "s3-creds", "accessKey")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Permanent);
    assert!(matches!(err, CoreError::Store(StoreError::Forbidden(_))));
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn exhausted_retries_become_internal_error() {
    let store = ScriptedStore::new(
        (0..3)
            .map(|i| Err(StoreError::Timeout(format!("attempt {i}"))))
            .collect(),
    );
    let accessor = SecretAccessor::new(store.clone(), fast(3));

    let err = accessor
        .get_secret(&CancellationToken::new(), "argo", "s3-creds", "accessKey")
        .await
        .unwrap_err();

    match err {
        CoreError::Internal { message, source } => {
            assert!(message.contains("s3-creds"));
            assert_eq!(source, StoreError::Timeout("attempt 2".into()));
        }
        other => panic!("expected internal error, got {other:?}"),
    }
    assert_eq!(store.calls(), 3);
}

#[tokio::test]
async fn missing_key_is_bad_request_without_retry() {
    let store = ScriptedStore::new(vec![Ok(creds()), Ok(creds())]);
    let accessor = SecretAccessor::new(store.clone(), fast(5));

    let err = accessor
        .get_secret(&CancellationToken::new(), "argo", "s3-creds", "token")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadRequest);
    let msg = err.to_string();
    assert!(msg.contains("s3-creds"), "{msg}");
    assert!(msg.contains("token"), "{msg}");
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn cancelled_token_skips_store() {
    let store = ScriptedStore::new(vec![Ok(creds())]);
    let accessor = SecretAccessor::new(store.clone(), fast(5));

    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = accessor
        .get_secret(&cancel, "argo", "s3-creds", "accessKey")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn cancellation_during_backoff_aborts_promptly() {
    let store = ScriptedStore::new(vec![
        Err(StoreError::TooManyRequests("throttled".into())),
        Ok(creds()),
    ]);
    let slow = BackoffStrategy {
        jitter: JitterStrategy::None,
        first_ms: 60_000,
        max_ms: 60_000,
        factor: 1.0,
        steps: 5,
    };
    let accessor = SecretAccessor::new(store.clone(), slow);

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let err = tokio::time::timeout(
        Duration::from_secs(10),
        accessor.get_secret(&cancel, "argo", "s3-creds", "accessKey"),
    )
    .await
    .expect("cancellation must interrupt the backoff sleep")
    .unwrap_err();

    assert!(matches!(err, CoreError::Cancelled));
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn custom_classifier_overrides_default() {
    let store = ScriptedStore::new(vec![
        Err(StoreError::NotFound { name: "late".into() }),
        Ok(creds()),
    ]);
    let accessor = SecretAccessor::new(store.clone(), fast(5)).with_classifier(|e| match e {
        StoreError::NotFound { .. } => Classification::Transient,
        other => other.classify(),
    });

    let value = accessor
        .get_secret(&CancellationToken::new(), "argo", "late", "accessKey")
        .await
        .unwrap();

    assert_eq!(value, b"AKIA");
    assert_eq!(store.calls(), 2);
}

#[tokio::test]
async fn every_call_hits_the_store() {
    let store = ScriptedStore::new(vec![Ok(creds()), Ok(creds())]);
    let accessor = SecretAccessor::new(store.clone(), fast(5));
    let cancel = CancellationToken::new();

    for _ in 0..2 {
        accessor
            .get_secret(&cancel, "argo", "s3-creds", "accessKey")
            .await
            .unwrap();
    }
    assert_eq!(store.calls(), 2);
}
