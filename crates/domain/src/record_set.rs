//! The provider's structured record-set model and the change operations
//! submitted against it.

use crate::record_type::RecordType;
use crate::routing::RoutingPolicy;
use serde::{Deserialize, Serialize};

/// Provider handle for a hosted zone. Ids sometimes arrive with the
/// `/hostedzone/` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneInfo {
    pub id: String,
    pub name: String,
}

impl ZoneInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        ZoneInfo {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Zone id with any `/hostedzone/` prefix removed.
    pub fn plain_id(&self) -> &str {
        self.id.strip_prefix("/hostedzone/").unwrap_or(&self.id)
    }
}

/// Alias target as the provider models it: resolved zone id, absolute
/// target name, health evaluation flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTarget {
    pub dns_name: String,
    pub hosted_zone_id: String,
    pub evaluate_target_health: bool,
}

/// The canonical reconciliation granule: one (name, type, identifier) unit
/// holding either provider value strings or a single alias target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    pub name: String,
    pub rtype: RecordType,
    pub ttl: Option<u32>,
    pub values: Vec<String>,
    pub alias_target: Option<AliasTarget>,
    pub routing: Option<RoutingPolicy>,
    pub set_identifier: Option<String>,
    pub health_check_id: Option<String>,
    /// Set on listings of records managed by a traffic policy; such sets
    /// cannot be represented in zone text and are skipped on export.
    pub traffic_policy: bool,
}

impl RecordSet {
    pub fn new(name: impl Into<String>, rtype: RecordType) -> Self {
        RecordSet {
            name: name.into(),
            rtype,
            ttl: None,
            values: Vec::new(),
            alias_target: None,
            routing: None,
            set_identifier: None,
            health_check_id: None,
            traffic_policy: false,
        }
    }

    pub fn is_alias(&self) -> bool {
        self.alias_target.is_some()
    }

    /// True for the zone's own authoritative NS/SOA unit.
    pub fn is_auth(&self, zone_name: &str) -> bool {
        self.rtype.is_auth() && self.name == zone_name
    }

    /// Deterministic content key: two sets are judged identical for
    /// reconciliation purposes iff their keys match. Values are sorted so
    /// ordering differences do not produce spurious changes.
    pub fn canonical_key(&self) -> String {
        let mut values = self.values.clone();
        values.sort();
        let mut key = format!(
            "{}|{}|{}|{}",
            self.name,
            self.rtype,
            self.ttl.map(|t| t.to_string()).unwrap_or_default(),
            values.join("\u{1f}")
        );
        if let Some(ref alias) = self.alias_target {
            key.push_str(&format!(
                "|alias:{} {} {}",
                alias.dns_name, alias.hosted_zone_id, alias.evaluate_target_health
            ));
        }
        if let Some(ref routing) = self.routing {
            key.push_str(&format!("|{}", routing.to_key_values()));
        }
        if let Some(ref id) = self.set_identifier {
            key.push_str(&format!("|id:{}", id));
        }
        if let Some(ref hc) = self.health_check_id {
            key.push_str(&format!("|hc:{}", hc));
        }
        key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeAction {
    Create,
    Delete,
}

/// One create/delete operation against the zone directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeOperation {
    pub action: ChangeAction,
    pub record_set: RecordSet,
}

impl ChangeOperation {
    pub fn create(record_set: RecordSet) -> Self {
        ChangeOperation {
            action: ChangeAction::Create,
            record_set,
        }
    }

    pub fn delete(record_set: RecordSet) -> Self {
        ChangeOperation {
            action: ChangeAction::Delete,
            record_set,
        }
    }
}
