mod domain;
pub use domain::{
    ENV_DEL_PROPAGATION_POLICY, DEFAULT_TERMINATION_LOG, SELECTOR_NAME_FIELD,
};
pub use domain::{Artifact, Named, Parameter, PropagationPolicy, SecretRef};

mod error;
pub use error::{ModelError, ModelResult};

mod strategy;
pub use strategy::{BackoffStrategy, JitterStrategy};

mod config;
pub use config::UtilConfig;
