use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown jitter strategy: {0}")]
    UnknownJitter(String),

    #[error("unknown deletion propagation policy: {0} (expected: background|orphan|foreground)")]
    UnknownPropagation(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
