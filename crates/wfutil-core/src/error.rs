use thiserror::Error;
use wfutil_model::ModelError;

use crate::secret::StoreError;

/// Coarse failure category a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-retryable backing store error, surfaced as is.
    Permanent,
    /// The request was served but cannot be satisfied (e.g. missing secret key).
    BadRequest,
    /// Retry budget exhausted.
    Internal,
    /// The caller's token fired before completion.
    Cancelled,
    /// An internal invariant does not hold; the caller must not proceed.
    Contract,
    Io,
    Invalid,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {message}: {source}")]
    Internal {
        message: String,
        #[source]
        source: StoreError,
    },

    #[error("operation cancelled")]
    Cancelled,

    #[error("contract violation: {0}")]
    Contract(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Model(#[from] ModelError),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Store(_) => ErrorKind::Permanent,
            CoreError::BadRequest(_) => ErrorKind::BadRequest,
            CoreError::Internal { .. } => ErrorKind::Internal,
            CoreError::Cancelled => ErrorKind::Cancelled,
            CoreError::Contract(_) => ErrorKind::Contract,
            CoreError::Io(_) => ErrorKind::Io,
            CoreError::Model(_) => ErrorKind::Invalid,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
