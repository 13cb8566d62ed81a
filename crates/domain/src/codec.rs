//! Per-type conversion between structured records and the provider's
//! value-string representation, and between grouped zone records and
//! record sets.

use crate::alias::{AliasRecord, ALIAS_TTL};
use crate::errors::ZoneError;
use crate::extension::AwsExtension;
use crate::names::{absolute, quote, quote_values, split_quoted_values, unquote};
use crate::record::{Record, RecordData, RecordEntry, ZoneRecord};
use crate::record_set::{AliasTarget, RecordSet};
use crate::record_type::RecordType;
use crate::ZoneRef;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

fn naptr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^(\d+) (\d+) "([^"]*)" "([^"]*)" "([^"]*)" "?([^"]+)"?$"#).unwrap()
    })
}

fn bad_value(rtype: RecordType, value: &str) -> ZoneError {
    ZoneError::BadRecordValue {
        rtype: rtype.to_string(),
        value: value.to_string(),
    }
}

/// Encode a record's data as a single provider value string.
pub fn encode_value(data: &RecordData) -> String {
    match data {
        RecordData::A(addr) => addr.to_string(),
        RecordData::Aaaa(addr) => addr.to_string(),
        RecordData::Caa { flag, tag, value } => format!("{} {} {}", flag, tag, quote(value)),
        RecordData::Cname { target } => target.clone(),
        RecordData::Mx {
            preference,
            exchange,
        } => format!("{} {}", preference, exchange),
        RecordData::Naptr {
            order,
            preference,
            flags,
            service,
            regexp,
            replacement,
        } => {
            // The provider format cannot carry both a regexp and a
            // replacement; a terminal rule keeps the regexp, a non-terminal
            // one keeps the (quoted) replacement.
            if replacement == "." {
                format!(
                    "{} {} \"{}\" \"{}\" \"{}\" .",
                    order, preference, flags, service, regexp
                )
            } else {
                format!(
                    "{} {} \"{}\" \"{}\" \"\" \"{}\"",
                    order, preference, flags, service, replacement
                )
            }
        }
        RecordData::Ns { nameserver } => nameserver.clone(),
        RecordData::Ptr { target } => target.clone(),
        RecordData::Soa {
            primary_ns,
            mailbox,
            serial,
            refresh,
            retry,
            expire,
            minimum_ttl,
        } => format!(
            "{} {} {} {} {} {} {}",
            primary_ns, mailbox, serial, refresh, retry, expire, minimum_ttl
        ),
        RecordData::Spf { chunks } => quote_values(chunks),
        RecordData::Srv {
            priority,
            weight,
            port,
            target,
        } => format!("{} {} {} {}", priority, weight, port, target),
        RecordData::Txt { chunks } => quote_values(chunks),
    }
}

/// Decode a provider value string into record data for a known type.
pub fn decode_value(rtype: RecordType, value: &str) -> Result<RecordData, ZoneError> {
    let err = || bad_value(rtype, value);
    match rtype {
        RecordType::A => Ok(RecordData::A(value.parse().map_err(|_| err())?)),
        RecordType::AAAA => Ok(RecordData::Aaaa(value.parse().map_err(|_| err())?)),
        RecordType::CAA => {
            let mut parts = value.splitn(3, ' ');
            let flag = parts
                .next()
                .and_then(|t| t.parse().ok())
                .ok_or_else(err)?;
            let tag = parts.next().ok_or_else(err)?.to_string();
            let quoted = parts.next().ok_or_else(err)?;
            Ok(RecordData::Caa {
                flag,
                tag,
                value: unquote(quoted),
            })
        }
        RecordType::CNAME => Ok(RecordData::Cname {
            target: absolute(value),
        }),
        RecordType::MX => {
            let mut parts = value.splitn(2, ' ');
            let preference = parts
                .next()
                .and_then(|t| t.parse().ok())
                .ok_or_else(err)?;
            let exchange = absolute(parts.next().ok_or_else(err)?);
            Ok(RecordData::Mx {
                preference,
                exchange,
            })
        }
        RecordType::NAPTR => {
            let caps = naptr_re().captures(value).ok_or_else(err)?;
            let num = |i: usize| caps[i].parse::<u16>().map_err(|_| err());
            Ok(RecordData::Naptr {
                order: num(1)?,
                preference: num(2)?,
                flags: caps[3].to_string(),
                service: caps[4].to_string(),
                regexp: caps[5].to_string(),
                replacement: caps[6].to_string(),
            })
        }
        RecordType::NS => Ok(RecordData::Ns {
            nameserver: value.to_string(),
        }),
        RecordType::PTR => Ok(RecordData::Ptr {
            target: value.to_string(),
        }),
        RecordType::SOA => {
            let parts: Vec<&str> = value.split_whitespace().collect();
            if parts.len() != 7 {
                return Err(err());
            }
            let num = |i: usize| parts[i].parse::<u32>().map_err(|_| err());
            Ok(RecordData::Soa {
                primary_ns: parts[0].to_string(),
                mailbox: parts[1].to_string(),
                serial: num(2)?,
                refresh: num(3)?,
                retry: num(4)?,
                expire: num(5)?,
                minimum_ttl: num(6)?,
            })
        }
        RecordType::SPF => Ok(RecordData::Spf {
            chunks: split_quoted_values(value),
        }),
        RecordType::SRV => {
            let parts: Vec<&str> = value.split_whitespace().collect();
            if parts.len() != 4 {
                return Err(err());
            }
            let num = |i: usize| parts[i].parse::<u16>().map_err(|_| err());
            Ok(RecordData::Srv {
                priority: num(0)?,
                weight: num(1)?,
                port: num(2)?,
                target: absolute(parts[3]),
            })
        }
        RecordType::TXT => Ok(RecordData::Txt {
            chunks: split_quoted_values(value),
        }),
    }
}

/// Convert a group of zone records into one record set.
///
/// The records must have been previously grouped by matching name, type
/// and (if applicable) set identifier. Returns `None` for an empty group.
pub fn record_set_from_records(records: &[ZoneRecord]) -> Option<RecordSet> {
    let first = records.first()?;
    let mut set = RecordSet::new(first.name().to_lowercase(), first.set_type());
    set.ttl = Some(first.ttl());

    for record in records {
        if let Some(ref ext) = record.extension {
            set.routing = Some(ext.routing.clone());
            set.set_identifier = Some(ext.set_identifier.clone());
            if ext.health_check_id.is_some() {
                set.health_check_id = ext.health_check_id.clone();
            }
        }
        match &record.entry {
            RecordEntry::Alias(alias) => {
                // Alias units have no resource records and no TTL.
                set.rtype = alias.target_type;
                set.alias_target = Some(AliasTarget {
                    dns_name: alias.target.clone(),
                    hosted_zone_id: alias.zone_ref.to_string(),
                    evaluate_target_health: alias.evaluate_target_health,
                });
                set.ttl = None;
            }
            RecordEntry::Standard(record) => {
                set.values.push(encode_value(&record.data));
            }
        }
    }
    Some(set)
}

/// Convert a record set back into zone records, one per provider value.
///
/// A routing policy on the set fans out to every produced record.
pub fn records_from_record_set(set: &RecordSet) -> Result<Vec<ZoneRecord>, ZoneError> {
    let mut records = Vec::new();

    if let Some(ref alias) = set.alias_target {
        records.push(ZoneRecord::alias(AliasRecord {
            name: set.name.clone(),
            ttl: ALIAS_TTL,
            target_type: set.rtype,
            target: alias.dns_name.clone(),
            zone_ref: ZoneRef::parse(&alias.hosted_zone_id),
            evaluate_target_health: alias.evaluate_target_health,
        }));
    } else if set.traffic_policy {
        warn!("Skipping traffic policy record {}", set.name);
        return Ok(records);
    } else {
        let ttl = set.ttl.unwrap_or(0);
        for value in &set.values {
            records.push(ZoneRecord::standard(Record {
                name: set.name.clone(),
                ttl,
                data: decode_value(set.rtype, value)?,
            }));
        }
    }

    if let Some(ref routing) = set.routing {
        let ext = AwsExtension {
            routing: routing.clone(),
            set_identifier: set.set_identifier.clone().unwrap_or_default(),
            health_check_id: set.health_check_id.clone(),
        };
        for record in &mut records {
            record.extension = Some(ext.clone());
        }
    }

    Ok(records)
}
