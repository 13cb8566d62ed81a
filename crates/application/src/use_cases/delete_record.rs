use crate::ports::ZoneDirectory;
use crate::services::wait_for_change;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use zone53_domain::names::{qualify_name, unescape_name};
use zone53_domain::{ChangeOperation, RecordType, ZoneError, ZoneInfo};

/// Delete the record sets matching a (possibly relative) name and type,
/// optionally narrowed to one set identifier.
pub struct DeleteRecordUseCase {
    directory: Arc<dyn ZoneDirectory>,
}

impl DeleteRecordUseCase {
    pub fn new(directory: Arc<dyn ZoneDirectory>) -> Self {
        Self { directory }
    }

    #[instrument(skip(self), fields(zone = %zone.name))]
    pub async fn execute(
        &self,
        zone: &ZoneInfo,
        name: &str,
        rtype: RecordType,
        identifier: Option<&str>,
        wait: bool,
    ) -> Result<usize, ZoneError> {
        let wanted = qualify_name(name, &zone.name);
        let sets = self.directory.list_record_sets(&zone.id).await?;

        let changes: Vec<ChangeOperation> = sets
            .into_iter()
            .filter(|set| {
                unescape_name(&set.name) == wanted
                    && set.rtype == rtype
                    && identifier.map_or(true, |id| set.set_identifier.as_deref() == Some(id))
            })
            .map(ChangeOperation::delete)
            .collect();

        if changes.is_empty() {
            warn!("no records matched - nothing deleted");
            return Ok(0);
        }

        let deleted = changes.len();
        let token = self.directory.submit_changes(&zone.id, &changes).await?;
        info!("{} record sets deleted", deleted);
        if wait {
            wait_for_change(self.directory.as_ref(), &token).await?;
        }
        Ok(deleted)
    }
}
