use thiserror::Error;

/// Terminal outcome of a failed [`super::retry`] call.
#[derive(Debug, Error)]
pub enum RetryError<E> {
    #[error("permanent failure: {0}")]
    Permanent(E),

    #[error("gave up after {attempts} attempts: {last}")]
    Exhausted { attempts: u32, last: E },

    #[error("retry cancelled")]
    Cancelled,
}

impl<E> RetryError<E> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RetryError::Cancelled)
    }
}
