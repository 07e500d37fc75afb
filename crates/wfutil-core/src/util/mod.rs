mod close;
pub use close::{Close, close_quietly};

mod merge;
pub use merge::{merge_artifacts, merge_by_name, merge_parameters};

mod node;
pub use node::recover_index_from_node_name;

mod termination;
pub use termination::TerminationLog;
