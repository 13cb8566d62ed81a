//! Grouping of flat zone records into record-set units.

use std::collections::BTreeMap;
use zone53_domain::{RecordType, ZoneRecord};

/// Key a record set is grouped under: owner name, type, set identifier.
/// Aliases key on their *target* type but stay distinct from standard
/// records, so an A alias and AAAA alias at the same name never collapse
/// into one unit and never merge with plain A records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    pub name: String,
    pub rtype: RecordType,
    pub alias: bool,
    pub identifier: String,
}

impl GroupKey {
    pub fn of(record: &ZoneRecord) -> GroupKey {
        GroupKey {
            name: record.name().to_lowercase(),
            rtype: record.set_type(),
            alias: record.is_alias(),
            identifier: record.set_identifier().unwrap_or_default().to_string(),
        }
    }
}

/// Group records by name, type and (if applicable) identifier, preserving
/// the record order within each group.
pub fn group_records(records: Vec<ZoneRecord>) -> BTreeMap<GroupKey, Vec<ZoneRecord>> {
    let mut grouped: BTreeMap<GroupKey, Vec<ZoneRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(GroupKey::of(&record)).or_default().push(record);
    }
    grouped
}
