//! Well-known strings shared by the model and the utility layer.

/// Environment variable overriding the deletion propagation policy.
pub const ENV_DEL_PROPAGATION_POLICY: &str = "WF_DEL_PROPAGATION_POLICY";

/// Path the container runtime reads the termination message from.
pub const DEFAULT_TERMINATION_LOG: &str = "/dev/termination-log";

/// Field name matched by name selectors (`metadata.name=<name>`).
pub const SELECTOR_NAME_FIELD: &str = "metadata.name";
