//! The private ALIAS pseudo-record.
//!
//! Aliases are not part of vanilla zone files: they live in the private
//! `AWS` class with presentation rdata `type target zoneid evalhealth`.
//! The zone reference may be a literal zone id or the `$self` sentinel
//! meaning "the zone being operated on".

use crate::errors::ZoneError;
use crate::record_type::RecordType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zone file class name for alias records.
pub const ALIAS_CLASS: &str = "AWS";
/// Zone file type name for alias records.
pub const ALIAS_TYPE: &str = "ALIAS";
/// Sentinel zone reference for the zone currently being operated on.
pub const SELF_ZONE: &str = "$self";

/// Aliases carry no TTL-bearing value data; this fixed TTL is used when one
/// is rendered to zone text.
pub const ALIAS_TTL: u32 = 86400;

/// Reference to the hosted zone an alias points into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneRef {
    Id(String),
    This,
}

impl ZoneRef {
    pub fn parse(s: &str) -> ZoneRef {
        if s == SELF_ZONE {
            ZoneRef::This
        } else {
            ZoneRef::Id(s.to_string())
        }
    }
}

impl fmt::Display for ZoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneRef::Id(id) => write!(f, "{}", id),
            ZoneRef::This => write!(f, "{}", SELF_ZONE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    pub name: String,
    pub ttl: u32,
    /// Record type of the alias target.
    pub target_type: RecordType,
    /// DNS name the alias points at.
    pub target: String,
    /// Hosted zone containing the target.
    pub zone_ref: ZoneRef,
    pub evaluate_target_health: bool,
}

impl AliasRecord {
    /// Parse the four rdata fields: `type target zoneid evaluateTargetHealth`.
    pub fn from_rdata(name: &str, ttl: u32, fields: &[String]) -> Result<AliasRecord, ZoneError> {
        if fields.len() != 4 {
            return Err(ZoneError::BadZoneLine(
                "4 parts required for ALIAS: type target zoneid evaluateTargetHealth".to_string(),
            ));
        }
        Ok(AliasRecord {
            name: name.to_string(),
            ttl,
            target_type: fields[0].parse()?,
            target: fields[1].clone(),
            zone_ref: ZoneRef::parse(&fields[2]),
            evaluate_target_health: fields[3] == "true",
        })
    }

    pub fn rdata(&self) -> String {
        format!(
            "{} {} {} {}",
            self.target_type, self.target, self.zone_ref, self.evaluate_target_health
        )
    }
}
