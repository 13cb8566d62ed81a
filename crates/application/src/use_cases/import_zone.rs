use crate::ports::{ChangeToken, ZoneDirectory};
use crate::services::{
    chunk_changes, expand_self_aliases, group_records, reconcile, wait_for_change,
};
use std::sync::Arc;
use tracing::{info, instrument};
use zone53_domain::codec::record_set_from_records;
use zone53_domain::names::unescape_name;
use zone53_domain::{RecordSet, ZoneError, ZoneInfo, ZoneRecord};

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Reconcile against the existing zone contents, deleting record sets
    /// absent from the imported file. Without this, records are only added.
    pub replace: bool,
    /// Include the zone's own authoritative NS/SOA unit in the operation.
    pub edit_auth: bool,
    /// Poll until the provider reports the change as propagated.
    pub wait: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub records: usize,
    pub changes: usize,
    pub creates: usize,
    pub deletes: usize,
}

/// Import parsed zone records into a zone: expand self aliases, group into
/// record sets, diff against the existing state and submit ordered batches.
pub struct ImportZoneUseCase {
    directory: Arc<dyn ZoneDirectory>,
}

impl ImportZoneUseCase {
    pub fn new(directory: Arc<dyn ZoneDirectory>) -> Self {
        Self { directory }
    }

    #[instrument(skip(self, records), fields(zone = %zone.name))]
    pub async fn execute(
        &self,
        zone: &ZoneInfo,
        mut records: Vec<ZoneRecord>,
        opts: &ImportOptions,
    ) -> Result<ImportSummary, ZoneError> {
        let record_count = records.len();
        expand_self_aliases(&mut records, zone);

        let desired: Vec<RecordSet> = group_records(records)
            .into_values()
            .filter_map(|group| record_set_from_records(&group))
            .filter(|set| opts.edit_auth || !set.is_auth(&zone.name))
            .collect();

        let existing: Vec<RecordSet> = if opts.replace {
            self.directory
                .list_record_sets(&zone.id)
                .await?
                .into_iter()
                .map(|mut set| {
                    set.name = unescape_name(&set.name);
                    set
                })
                .filter(|set| opts.edit_auth || !set.is_auth(&zone.name))
                .collect()
        } else {
            Vec::new()
        };

        let plan = reconcile(&desired, &existing);
        let summary = ImportSummary {
            records: record_count,
            changes: plan.len(),
            creates: plan.creates.len(),
            deletes: plan.deletes.len(),
        };

        let changes = plan.into_changes();
        let mut last_token: Option<ChangeToken> = None;
        for batch in chunk_changes(&changes) {
            last_token = Some(self.directory.submit_changes(&zone.id, batch).await?);
        }

        info!(
            "{} records imported ({} changes / {} additions / {} deletions)",
            summary.records, summary.changes, summary.creates, summary.deletes
        );

        if opts.wait {
            if let Some(token) = last_token {
                wait_for_change(self.directory.as_ref(), &token).await?;
            }
        }
        Ok(summary)
    }
}
