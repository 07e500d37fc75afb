mod secret;
pub use secret::SecretRef;

mod propagation;
pub use propagation::PropagationPolicy;

mod named;
pub use named::{Artifact, Named, Parameter};

mod constants;
pub use constants::{DEFAULT_TERMINATION_LOG, ENV_DEL_PROPAGATION_POLICY, SELECTOR_NAME_FIELD};
