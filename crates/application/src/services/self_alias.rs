//! Rewriting between the portable `$self` zone reference and the concrete
//! zone a command operates on.

use zone53_domain::names::{qualify_name, shorten_name};
use zone53_domain::{RecordEntry, ZoneInfo, ZoneRecord, ZoneRef};

/// Import path: resolve the `$self` sentinel to the operated-on zone and
/// fully qualify the alias target against the zone origin.
pub fn expand_self_aliases(records: &mut [ZoneRecord], zone: &ZoneInfo) {
    for record in records {
        if let RecordEntry::Alias(alias) = &mut record.entry {
            if alias.zone_ref == ZoneRef::This {
                alias.zone_ref = ZoneRef::Id(zone.plain_id().to_string());
                alias.target = qualify_name(&alias.target, &zone.name);
            }
        }
    }
}

/// Export path: any alias pointing into the operated-on zone becomes
/// `$self` again, with the target shortened unless full names were asked
/// for.
pub fn contract_self_aliases(records: &mut [ZoneRecord], zone: &ZoneInfo, full_names: bool) {
    let id = zone.plain_id();
    for record in records {
        if let RecordEntry::Alias(alias) = &mut record.entry {
            if alias.zone_ref == ZoneRef::Id(id.to_string()) {
                alias.zone_ref = ZoneRef::This;
                if !full_names {
                    alias.target = shorten_name(&alias.target, &zone.name);
                }
            }
        }
    }
}
