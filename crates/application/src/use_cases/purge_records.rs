use crate::ports::{ChangeToken, ZoneDirectory};
use crate::services::{chunk_changes, wait_for_change};
use std::sync::Arc;
use tracing::{info, instrument};
use zone53_domain::{ChangeOperation, ZoneError, ZoneInfo};

/// Delete every record set in a zone except the authoritative NS/SOA ones.
pub struct PurgeRecordsUseCase {
    directory: Arc<dyn ZoneDirectory>,
}

impl PurgeRecordsUseCase {
    pub fn new(directory: Arc<dyn ZoneDirectory>) -> Self {
        Self { directory }
    }

    #[instrument(skip(self), fields(zone = %zone.name))]
    pub async fn execute(&self, zone: &ZoneInfo, wait: bool) -> Result<usize, ZoneError> {
        let sets = self.directory.list_record_sets(&zone.id).await?;
        let changes: Vec<ChangeOperation> = sets
            .into_iter()
            .filter(|set| !set.rtype.is_auth())
            .map(ChangeOperation::delete)
            .collect();

        if changes.is_empty() {
            return Ok(0);
        }

        let deleted = changes.len();
        let mut last_token: Option<ChangeToken> = None;
        for batch in chunk_changes(&changes) {
            last_token = Some(self.directory.submit_changes(&zone.id, batch).await?);
        }
        info!("{} record sets deleted", deleted);

        if wait {
            if let Some(token) = last_token {
                wait_for_change(self.directory.as_ref(), &token).await?;
            }
        }
        Ok(deleted)
    }
}
