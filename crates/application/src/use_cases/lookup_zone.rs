use crate::ports::ZoneDirectory;
use std::sync::Arc;
use tracing::instrument;
use zone53_domain::names::{is_zone_id, zone_name};
use zone53_domain::{ZoneError, ZoneInfo};

/// Resolve a zone given either its id (optionally `/hostedzone/`-prefixed)
/// or its name. A name matching more than one zone is an error the caller
/// must resolve by id.
pub struct LookupZoneUseCase {
    directory: Arc<dyn ZoneDirectory>,
}

impl LookupZoneUseCase {
    pub fn new(directory: Arc<dyn ZoneDirectory>) -> Self {
        Self { directory }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, name_or_id: &str) -> Result<ZoneInfo, ZoneError> {
        if is_zone_id(name_or_id) {
            let id = name_or_id
                .strip_prefix("/hostedzone/")
                .unwrap_or(name_or_id);
            return self.directory.get_zone(id).await;
        }

        let wanted = zone_name(name_or_id);
        let matches: Vec<ZoneInfo> = self
            .directory
            .list_zones()
            .await?
            .into_iter()
            .filter(|zone| zone_name(&zone.name) == wanted || zone.id == name_or_id)
            .collect();

        let mut matches = matches.into_iter();
        match (matches.next(), matches.next()) {
            (None, _) => Err(ZoneError::ZoneNotFound(name_or_id.to_string())),
            (Some(zone), None) => Ok(zone),
            (Some(_), Some(_)) => Err(ZoneError::AmbiguousZone(name_or_id.to_string())),
        }
    }
}
