use crate::alias::AliasRecord;
use crate::extension::AwsExtension;
use crate::record_type::RecordType;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific record payload, one variant per catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Caa {
        flag: u8,
        tag: String,
        value: String,
    },
    Cname {
        target: String,
    },
    Mx {
        preference: u16,
        exchange: String,
    },
    Naptr {
        order: u16,
        preference: u16,
        flags: String,
        service: String,
        regexp: String,
        replacement: String,
    },
    Ns {
        nameserver: String,
    },
    Ptr {
        target: String,
    },
    Soa {
        primary_ns: String,
        mailbox: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum_ttl: u32,
    },
    Spf {
        chunks: Vec<String>,
    },
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    Txt {
        chunks: Vec<String>,
    },
}

impl RecordData {
    pub fn rtype(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Caa { .. } => RecordType::CAA,
            RecordData::Cname { .. } => RecordType::CNAME,
            RecordData::Mx { .. } => RecordType::MX,
            RecordData::Naptr { .. } => RecordType::NAPTR,
            RecordData::Ns { .. } => RecordType::NS,
            RecordData::Ptr { .. } => RecordType::PTR,
            RecordData::Soa { .. } => RecordType::SOA,
            RecordData::Spf { .. } => RecordType::SPF,
            RecordData::Srv { .. } => RecordType::SRV,
            RecordData::Txt { .. } => RecordType::TXT,
        }
    }
}

/// An ordinary DNS record: absolute dot-terminated owner name, TTL and
/// type-specific data. Class is always Internet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub ttl: u32,
    pub data: RecordData,
}

/// One zone file entry: a plain record or an alias pseudo-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordEntry {
    Standard(Record),
    Alias(AliasRecord),
}

/// A parsed zone file record with its optional extension metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub entry: RecordEntry,
    pub extension: Option<AwsExtension>,
}

impl ZoneRecord {
    pub fn standard(record: Record) -> Self {
        ZoneRecord {
            entry: RecordEntry::Standard(record),
            extension: None,
        }
    }

    pub fn alias(alias: AliasRecord) -> Self {
        ZoneRecord {
            entry: RecordEntry::Alias(alias),
            extension: None,
        }
    }

    pub fn with_extension(mut self, extension: AwsExtension) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn name(&self) -> &str {
        match &self.entry {
            RecordEntry::Standard(r) => &r.name,
            RecordEntry::Alias(a) => &a.name,
        }
    }

    pub fn ttl(&self) -> u32 {
        match &self.entry {
            RecordEntry::Standard(r) => r.ttl,
            RecordEntry::Alias(a) => a.ttl,
        }
    }

    /// The type a record set built from this entry would carry; aliases
    /// take their target type.
    pub fn set_type(&self) -> RecordType {
        match &self.entry {
            RecordEntry::Standard(r) => r.data.rtype(),
            RecordEntry::Alias(a) => a.target_type,
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self.entry, RecordEntry::Alias(_))
    }

    pub fn set_identifier(&self) -> Option<&str> {
        self.extension.as_ref().map(|e| e.set_identifier.as_str())
    }
}
