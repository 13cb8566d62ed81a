use crate::ports::ZoneDirectory;
use crate::services::contract_self_aliases;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::instrument;
use zone53_domain::codec::records_from_record_set;
use zone53_domain::{RecordSet, RecordType, ZoneError, ZoneInfo, ZoneRecord};

/// Export a zone's record sets back to zone records, ready for rendering
/// as zone text. Self aliases are contracted so the output is portable.
pub struct ExportZoneUseCase {
    directory: Arc<dyn ZoneDirectory>,
}

impl ExportZoneUseCase {
    pub fn new(directory: Arc<dyn ZoneDirectory>) -> Self {
        Self { directory }
    }

    #[instrument(skip(self), fields(zone = %zone.name))]
    pub async fn execute(
        &self,
        zone: &ZoneInfo,
        full_names: bool,
    ) -> Result<Vec<ZoneRecord>, ZoneError> {
        let mut sets = self.directory.list_record_sets(&zone.id).await?;
        sort_for_export(&mut sets, &zone.name);

        let mut records = Vec::new();
        for set in &sets {
            records.extend(records_from_record_set(set)?);
        }
        contract_self_aliases(&mut records, zone, full_names);
        Ok(records)
    }
}

/// Origin-owned sets first, SOA ahead of anything else at the same name,
/// then stable name/type ordering.
fn sort_for_export(sets: &mut [RecordSet], zone_name: &str) {
    sets.sort_by(|a, b| {
        if a.name == b.name {
            if a.rtype == RecordType::SOA {
                return Ordering::Less;
            }
            if b.rtype == RecordType::SOA {
                return Ordering::Greater;
            }
            return a.rtype.as_str().cmp(b.rtype.as_str());
        }
        if a.name == zone_name {
            return Ordering::Less;
        }
        if b.name == zone_name {
            return Ordering::Greater;
        }
        a.name.cmp(&b.name)
    });
}
