mod error;
pub use error::StoreError;

mod store;
pub use store::{SecretObject, SecretStore};

mod accessor;
pub use accessor::{Classifier, SecretAccessor};
