pub mod grouping;
pub mod propagation;
pub mod reconciliation;
pub mod self_alias;

pub use grouping::{group_records, GroupKey};
pub use propagation::wait_for_change;
pub use reconciliation::{chunk_changes, reconcile, ChangePlan, MAX_CHANGE_BATCH};
pub use self_alias::{contract_self_aliases, expand_self_aliases};
