#![allow(dead_code)]
use zone53_domain::{
    AliasTarget, AwsExtension, Record, RecordData, RecordSet, RecordType, RoutingPolicy,
    ZoneRecord,
};

pub struct RecordSetBuilder {
    set: RecordSet,
}

impl RecordSetBuilder {
    pub fn new(name: &str, rtype: RecordType) -> Self {
        let mut set = RecordSet::new(name, rtype);
        set.ttl = Some(300);
        RecordSetBuilder { set }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.set.ttl = Some(ttl);
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.set.values.push(value.to_string());
        self
    }

    pub fn alias(mut self, dns_name: &str, zone_id: &str, evaluate: bool) -> Self {
        self.set.alias_target = Some(AliasTarget {
            dns_name: dns_name.to_string(),
            hosted_zone_id: zone_id.to_string(),
            evaluate_target_health: evaluate,
        });
        self.set.ttl = None;
        self
    }

    pub fn routing(mut self, routing: RoutingPolicy, identifier: &str) -> Self {
        self.set.routing = Some(routing);
        self.set.set_identifier = Some(identifier.to_string());
        self
    }

    pub fn health_check(mut self, id: &str) -> Self {
        self.set.health_check_id = Some(id.to_string());
        self
    }

    pub fn build(self) -> RecordSet {
        self.set
    }
}

pub fn a_record(name: &str, ttl: u32, addr: &str) -> ZoneRecord {
    ZoneRecord::standard(Record {
        name: name.to_string(),
        ttl,
        data: RecordData::A(addr.parse().unwrap()),
    })
}

pub fn extended(record: ZoneRecord, routing: RoutingPolicy, identifier: &str) -> ZoneRecord {
    record.with_extension(AwsExtension {
        routing,
        set_identifier: identifier.to_string(),
        health_check_id: None,
    })
}
