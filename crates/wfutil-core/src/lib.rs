//! Utility layer of the workflow controller.
//!
//! - [`map`]: model strategies turned into `taskvisor` backoff policies.
//! - [`retry`]: bounded retries that tell transient failures from permanent ones.
//! - [`secret`]: secret field lookups on top of a [`secret::SecretStore`].
//! - [`selector`]: name selectors that are checked to decode back to their input.
//! - [`util`]: small helpers shared by the controller and the executor.
pub mod error;
pub mod map;
pub mod retry;
pub mod secret;
pub mod selector;
pub mod util;

pub use error::{CoreError, CoreResult, ErrorKind};

pub mod prelude {
    pub use crate::error::{CoreError, CoreResult, ErrorKind};
    pub use crate::retry::{Classification, RetryError, retry};
    pub use crate::secret::{SecretAccessor, SecretObject, SecretStore, StoreError};
    pub use crate::selector::{decode_name_selector, encode_name_selector};
}
