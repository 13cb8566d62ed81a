use crate::ports::ZoneDirectory;
use crate::services::{expand_self_aliases, wait_for_change};
use std::sync::Arc;
use tracing::{info, instrument};
use zone53_domain::codec::record_set_from_records;
use zone53_domain::{
    ChangeOperation, RecordSet, RoutingPolicy, ZoneError, ZoneInfo, ZoneRecord,
};

/// Routing flags for a single-record create. At most one routing strategy
/// may be given, and an identifier is required with (and only with) one.
#[derive(Debug, Clone, Default)]
pub struct CreateRecordOptions {
    pub identifier: Option<String>,
    pub failover: Option<String>,
    pub health_check_id: Option<String>,
    pub weight: Option<i64>,
    pub region: Option<String>,
    pub country_code: Option<String>,
    pub continent_code: Option<String>,
    pub multi_value: bool,
    /// Delete any existing record set with the same name, type and
    /// identifier before creating.
    pub replace: bool,
    pub wait: bool,
}

impl CreateRecordOptions {
    fn routing(&self) -> Option<RoutingPolicy> {
        if let Some(ref state) = self.failover {
            Some(RoutingPolicy::Failover {
                state: state.clone(),
            })
        } else if let Some(weight) = self.weight {
            Some(RoutingPolicy::Weighted { weight })
        } else if let Some(ref region) = self.region {
            Some(RoutingPolicy::Latency {
                region: region.clone(),
            })
        } else if self.country_code.is_some() || self.continent_code.is_some() {
            Some(RoutingPolicy::GeoLocation {
                country_code: self.country_code.clone(),
                continent_code: self.continent_code.clone(),
                subdivision_code: None,
            })
        } else if self.multi_value {
            Some(RoutingPolicy::MultiValue)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), ZoneError> {
        if let Some(ref state) = self.failover {
            if state != "PRIMARY" && state != "SECONDARY" {
                return Err(ZoneError::RoutingConflict(
                    "failover must be PRIMARY or SECONDARY".to_string(),
                ));
            }
        }
        let strategies = [
            self.failover.is_some(),
            self.weight.is_some(),
            self.region.is_some(),
            self.country_code.is_some(),
            self.continent_code.is_some(),
            self.multi_value,
        ]
        .iter()
        .filter(|&&set| set)
        .count();

        if strategies > 1 {
            return Err(ZoneError::RoutingConflict(
                "failover, weight, region, country-code, continent-code and multivalue are mutually exclusive"
                    .to_string(),
            ));
        }
        if strategies > 0 && self.identifier.is_none() {
            return Err(ZoneError::RoutingConflict(
                "identifier must be set when creating an extended record".to_string(),
            ));
        }
        if strategies == 0 && self.identifier.is_some() {
            return Err(ZoneError::RoutingConflict(
                "identifier should only be set when creating an extended record".to_string(),
            ));
        }
        Ok(())
    }
}

/// Create (or replace) a single record set from one parsed zone record.
pub struct CreateRecordUseCase {
    directory: Arc<dyn ZoneDirectory>,
}

impl CreateRecordUseCase {
    pub fn new(directory: Arc<dyn ZoneDirectory>) -> Self {
        Self { directory }
    }

    #[instrument(skip(self, record), fields(zone = %zone.name))]
    pub async fn execute(
        &self,
        zone: &ZoneInfo,
        record: ZoneRecord,
        opts: &CreateRecordOptions,
    ) -> Result<RecordSet, ZoneError> {
        opts.validate()?;

        let mut records = vec![record];
        expand_self_aliases(&mut records, zone);
        let mut set = record_set_from_records(&records)
            .ok_or_else(|| ZoneError::BadZoneLine("no record given".to_string()))?;

        if let Some(routing) = opts.routing() {
            set.routing = Some(routing);
        }
        if opts.identifier.is_some() {
            set.set_identifier = opts.identifier.clone();
        }
        if opts.health_check_id.is_some() {
            set.health_check_id = opts.health_check_id.clone();
        }

        let mut changes = Vec::new();
        if opts.replace {
            let existing = self.directory.list_record_sets(&zone.id).await?;
            if let Some(candidate) = existing.into_iter().find(|candidate| {
                candidate.name == set.name
                    && candidate.rtype == set.rtype
                    && candidate.set_identifier == set.set_identifier
            }) {
                changes.push(ChangeOperation::delete(candidate));
            }
        }
        changes.push(ChangeOperation::create(set.clone()));

        let token = self.directory.submit_changes(&zone.id, &changes).await?;
        info!("Created record set: '{}' {}", set.name, set.rtype);

        if opts.wait {
            wait_for_change(self.directory.as_ref(), &token).await?;
        }
        Ok(set)
    }
}
