//! Bounded retries driven by an error classifier.
//!
//! [`retry`] keeps calling an operation while its failures are [`Classification::Transient`]
//! and the [`BackoffStrategy`] still has steps left. A [`Classification::Permanent`] failure
//! ends the loop at once. The caller's [`CancellationToken`] is checked before every attempt
//! and interrupts the wait between attempts.
mod schedule;
pub use schedule::Schedule;

mod error;
pub use error::RetryError;

use std::{fmt, future::Future};

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use wfutil_model::BackoffStrategy;

/// Retry verdict for a single failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Expected to go away on its own; worth another attempt.
    Transient,
    /// Retrying cannot help.
    Permanent,
}

/// Run `op` until it succeeds, fails permanently, runs out of attempts or is cancelled.
///
/// At most `policy.max_attempts()` invocations are made. The returned
/// [`RetryError::Exhausted`] carries the error of the last invocation.
pub async fn retry<T, E, Op, Fut, C>(
    cancel: &CancellationToken,
    policy: &BackoffStrategy,
    classify: C,
    mut op: Op,
) -> Result<T, RetryError<E>>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&E) -> Classification,
    E: fmt::Display,
{
    let max_attempts = policy.max_attempts();
    let mut schedule = Schedule::new(policy);
    let mut attempt: u32 = 0;

    loop {
        if cancel.is_cancelled() {
            debug!(attempt, "cancelled before attempt");
            return Err(RetryError::Cancelled);
        }
        attempt += 1;

        let err = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(RetryError::Cancelled),
            res = op() => match res {
                Ok(value) => return Ok(value),
                Err(err) => err,
            },
        };

        match classify(&err) {
            Classification::Permanent => {
                debug!(attempt, error = %err, "permanent failure; not retrying");
                return Err(RetryError::Permanent(err));
            }
            Classification::Transient if attempt >= max_attempts => {
                warn!(attempts = attempt, error = %err, "retry budget exhausted");
                return Err(RetryError::Exhausted {
                    attempts: attempt,
                    last: err,
                });
            }
            Classification::Transient => {}
        }

        let delay = schedule.next_delay();
        debug!(
            attempt,
            max_attempts,
            delay_ms = delay.as_millis() as u64,
            error = %err,
            "transient failure; retrying"
        );
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(attempt, "cancelled while waiting for next attempt");
                return Err(RetryError::Cancelled);
            }
            _ = tokio::time::sleep(delay) => {}
        }
    }
}
