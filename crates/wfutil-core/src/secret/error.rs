use thiserror::Error;

use crate::retry::Classification;

/// Message fragments of lower-level transport errors that are worth retrying.
const TRANSIENT_HINTS: &[&str] = &[
    "connection refused",
    "connection reset",
    "broken pipe",
    "i/o timeout",
    "tls handshake timeout",
    "client connection lost",
    "exceeded quota",
    "unexpected eof",
];

/// Failure reported by a [`super::SecretStore`] lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("secret \"{name}\" not found")]
    NotFound { name: String },

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("too many requests: {0}")]
    TooManyRequests(String),

    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("internal server error: {0}")]
    InternalServer(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("{0}")]
    Other(String),
}

impl StoreError {
    /// Default retry verdict for store failures.
    ///
    /// Server-side overload and transport hiccups are transient; everything that
    /// describes the request itself (missing object, rejected input, denied access) is permanent.
    /// Untyped errors are transient only when their message matches a known transport failure.
    pub fn classify(&self) -> Classification {
        if self.is_transient() {
            Classification::Transient
        } else {
            Classification::Permanent
        }
    }

    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Timeout(_)
            | StoreError::TooManyRequests(_)
            | StoreError::ServiceUnavailable(_)
            | StoreError::InternalServer(_)
            | StoreError::Connection(_) => true,
            StoreError::Other(msg) => {
                let msg = msg.to_ascii_lowercase();
                msg.ends_with("eof") || TRANSIENT_HINTS.iter().any(|h| msg.contains(h))
            }
            StoreError::NotFound { .. }
            | StoreError::BadRequest(_)
            | StoreError::Unauthorized(_)
            | StoreError::Forbidden(_)
            | StoreError::Conflict(_) => false,
        }
    }
}
