//! The diff engine: desired record sets against an existing snapshot.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use zone53_domain::{ChangeOperation, RecordSet};

/// Maximum number of change operations per submitted batch.
pub const MAX_CHANGE_BATCH: usize = 100;

/// The outcome of a reconciliation pass.
#[derive(Debug, Clone, Default)]
pub struct ChangePlan {
    pub creates: Vec<RecordSet>,
    pub deletes: Vec<RecordSet>,
}

impl ChangePlan {
    pub fn is_empty(&self) -> bool {
        self.creates.is_empty() && self.deletes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.creates.len() + self.deletes.len()
    }

    /// Flatten into the submission order: all deletes, then creates with
    /// alias sets last (name-ordered among themselves) so aliases never
    /// race ahead of targets created in the same run.
    pub fn into_changes(self) -> Vec<ChangeOperation> {
        let mut creates = self.creates;
        creates.sort_by(|a, b| match (a.is_alias(), b.is_alias()) {
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => a.name.cmp(&b.name),
        });

        let mut changes: Vec<ChangeOperation> =
            self.deletes.into_iter().map(ChangeOperation::delete).collect();
        changes.extend(creates.into_iter().map(ChangeOperation::create));
        changes
    }
}

/// Compare desired units against the existing snapshot by canonical content
/// key. Matching units are left untouched; unmatched desired units become
/// creates and unmatched existing units become deletes.
pub fn reconcile(desired: &[RecordSet], existing: &[RecordSet]) -> ChangePlan {
    let mut remaining: BTreeMap<String, RecordSet> = existing
        .iter()
        .map(|set| (set.canonical_key(), set.clone()))
        .collect();

    let mut plan = ChangePlan::default();
    for set in desired {
        if remaining.remove(&set.canonical_key()).is_none() {
            plan.creates.push(set.clone());
        }
    }
    plan.deletes = remaining.into_values().collect();
    plan
}

/// Chunk a change list into submission batches of at most
/// [`MAX_CHANGE_BATCH`] operations.
pub fn chunk_changes(changes: &[ChangeOperation]) -> impl Iterator<Item = &[ChangeOperation]> {
    changes.chunks(MAX_CHANGE_BATCH)
}
