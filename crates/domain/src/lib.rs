//! zone53 Domain Layer
//!
//! Value types and codecs for the zone file / provider record-set boundary:
//! the closed record catalog, the routing-policy extension grammar and the
//! per-type value codec. Everything here is synchronous and owned fresh per
//! operation.
pub mod alias;
pub mod codec;
pub mod config;
pub mod errors;
pub mod extension;
pub mod names;
pub mod record;
pub mod record_set;
pub mod record_type;
pub mod routing;

pub use alias::{AliasRecord, ZoneRef, ALIAS_CLASS, ALIAS_TTL, ALIAS_TYPE, SELF_ZONE};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::ZoneError;
pub use extension::{parse_extension, render_extension, AwsExtension, KeyValues, EXTENSION_MARKER};
pub use record::{Record, RecordData, RecordEntry, ZoneRecord};
pub use record_set::{AliasTarget, ChangeAction, ChangeOperation, RecordSet, ZoneInfo};
pub use record_type::RecordType;
pub use routing::RoutingPolicy;
