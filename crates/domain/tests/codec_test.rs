use zone53_domain::codec::{decode_value, encode_value, record_set_from_records, records_from_record_set};
use zone53_domain::{
    Record, RecordData, RecordEntry, RecordSet, RecordType, RoutingPolicy, ZoneRecord, ZoneRef,
};

mod helpers;
use helpers::{a_record, extended, RecordSetBuilder};

fn round_trip(set: &RecordSet) -> RecordSet {
    let records = records_from_record_set(set).unwrap();
    record_set_from_records(&records).unwrap()
}

#[test]
fn decode_mx_scenario() {
    let data = decode_value(RecordType::MX, "5 mail.example.com.").unwrap();
    assert_eq!(
        data,
        RecordData::Mx {
            preference: 5,
            exchange: "mail.example.com.".to_string(),
        }
    );
}

#[test]
fn decode_mx_bare_target_becomes_absolute() {
    let data = decode_value(RecordType::MX, "10 mail.example.com").unwrap();
    assert_eq!(
        data,
        RecordData::Mx {
            preference: 10,
            exchange: "mail.example.com.".to_string(),
        }
    );
}

#[test]
fn txt_single_value_scenario() {
    let data = RecordData::Txt {
        chunks: vec!["hello".to_string()],
    };
    let value = encode_value(&data);
    assert_eq!(value, "\"hello\"");
    assert_eq!(decode_value(RecordType::TXT, &value).unwrap(), data);
}

#[test]
fn txt_special_characters_round_trip() {
    let data = RecordData::Txt {
        chunks: vec![
            "".to_string(),
            r#"a "quote" and a back\slash"#.to_string(),
        ],
    };
    let value = encode_value(&data);
    assert_eq!(decode_value(RecordType::TXT, &value).unwrap(), data);
}

#[test]
fn txt_multi_token_single_string_accepted() {
    // either arity convention must decode
    let data = decode_value(RecordType::TXT, "\"abc\" \"def\"").unwrap();
    assert_eq!(
        data,
        RecordData::Txt {
            chunks: vec!["abc".to_string(), "def".to_string()],
        }
    );
}

#[test]
fn soa_seven_fields() {
    let value = "ns-2018.awsdns-60.co.uk. awsdns-hostmaster.amazon.com. 1 7200 900 1209600 86400";
    let data = decode_value(RecordType::SOA, value).unwrap();
    assert_eq!(
        data,
        RecordData::Soa {
            primary_ns: "ns-2018.awsdns-60.co.uk.".to_string(),
            mailbox: "awsdns-hostmaster.amazon.com.".to_string(),
            serial: 1,
            refresh: 7200,
            retry: 900,
            expire: 1209600,
            minimum_ttl: 86400,
        }
    );
    assert_eq!(encode_value(&data), value);
}

#[test]
fn srv_fixed_fields() {
    let data = decode_value(RecordType::SRV, "0 5 5060 sipserver.example.com.").unwrap();
    assert_eq!(
        data,
        RecordData::Srv {
            priority: 0,
            weight: 5,
            port: 5060,
            target: "sipserver.example.com.".to_string(),
        }
    );
    assert_eq!(encode_value(&data), "0 5 5060 sipserver.example.com.");
}

#[test]
fn caa_quoted_value() {
    let data = decode_value(RecordType::CAA, "0 issue \"example.net\"").unwrap();
    assert_eq!(
        data,
        RecordData::Caa {
            flag: 0,
            tag: "issue".to_string(),
            value: "example.net".to_string(),
        }
    );
    assert_eq!(encode_value(&data), "0 issue \"example.net\"");
}

#[test]
fn naptr_terminal_rule_round_trip() {
    let value = r#"100 10 "u" "sip+E2U" "!^.*$!sip:information@foo.se!i" ."#;
    let data = decode_value(RecordType::NAPTR, value).unwrap();
    assert_eq!(
        data,
        RecordData::Naptr {
            order: 100,
            preference: 10,
            flags: "u".to_string(),
            service: "sip+E2U".to_string(),
            regexp: "!^.*$!sip:information@foo.se!i".to_string(),
            replacement: ".".to_string(),
        }
    );
    assert_eq!(encode_value(&data), value);
}

#[test]
fn naptr_unquoted_replacement_tolerated() {
    let data =
        decode_value(RecordType::NAPTR, r#"50 50 "a" "z3950+N2L+N2C" "" cidserver.example.com."#)
            .unwrap();
    match data {
        RecordData::Naptr { replacement, .. } => {
            assert_eq!(replacement, "cidserver.example.com.");
        }
        other => panic!("expected NAPTR, got {:?}", other),
    }
}

#[test]
fn bad_value_is_an_error() {
    assert!(decode_value(RecordType::A, "not-an-ip").is_err());
    assert!(decode_value(RecordType::SOA, "too few fields").is_err());
    assert!(decode_value(RecordType::NAPTR, "garbage").is_err());
}

#[test]
fn every_type_round_trips_through_a_record_set() {
    let sets = vec![
        RecordSetBuilder::new("example.com.", RecordType::A)
            .ttl(86400)
            .value("127.0.0.1")
            .build(),
        RecordSetBuilder::new("example.com.", RecordType::AAAA)
            .ttl(86400)
            .value("::1")
            .build(),
        RecordSetBuilder::new("test.example.com.", RecordType::CNAME)
            .ttl(86400)
            .value("www.example.com.")
            .build(),
        RecordSetBuilder::new("example.com.", RecordType::MX)
            .ttl(3600)
            .value("5 mail.example.com.")
            .build(),
        RecordSetBuilder::new("example.com.", RecordType::NS)
            .ttl(3600)
            .value("ns1.example.com.")
            .build(),
        RecordSetBuilder::new("98.", RecordType::PTR)
            .ttl(86400)
            .value("foo.example.com.")
            .build(),
        RecordSetBuilder::new("example.com.", RecordType::SOA)
            .ttl(900)
            .value("ns-2018.awsdns-60.co.uk. awsdns-hostmaster.amazon.com. 1 7200 900 1209600 86400")
            .build(),
        RecordSetBuilder::new("example.com.", RecordType::SPF)
            .ttl(900)
            .value("\"~all\"")
            .build(),
        RecordSetBuilder::new("_sip._tcp.example.com.", RecordType::SRV)
            .ttl(86400)
            .value("0 5 5060 sipserver.example.com.")
            .build(),
        RecordSetBuilder::new("example.com.", RecordType::TXT)
            .ttl(86400)
            .value("\"hello\"")
            .build(),
        RecordSetBuilder::new("example.com.", RecordType::CAA)
            .ttl(86400)
            .value("0 issue \"example.net\"")
            .build(),
        RecordSetBuilder::new("example.com.", RecordType::NAPTR)
            .ttl(86400)
            .value(r#"100 10 "u" "sip+E2U" "!^.*$!sip:information@foo.se!i" ."#)
            .build(),
    ];
    for set in sets {
        assert_eq!(round_trip(&set), set, "lossy conversion for {}", set.rtype);
    }
}

#[test]
fn alias_set_round_trips() {
    let set = RecordSetBuilder::new("example.com.", RecordType::A)
        .alias("target.example.com.", "Z123456789012", false)
        .build();
    let records = records_from_record_set(&set).unwrap();
    assert_eq!(records.len(), 1);
    match &records[0].entry {
        RecordEntry::Alias(alias) => {
            assert_eq!(alias.target_type, RecordType::A);
            assert_eq!(alias.target, "target.example.com.");
            assert_eq!(alias.zone_ref, ZoneRef::Id("Z123456789012".to_string()));
        }
        other => panic!("expected alias, got {:?}", other),
    }
    assert_eq!(record_set_from_records(&records).unwrap(), set);
}

#[test]
fn routing_policy_fans_out_and_back() {
    let policies = vec![
        RoutingPolicy::Failover {
            state: "PRIMARY".to_string(),
        },
        RoutingPolicy::GeoLocation {
            country_code: None,
            continent_code: Some("AF".to_string()),
            subdivision_code: None,
        },
        RoutingPolicy::Latency {
            region: "us-west-1".to_string(),
        },
        RoutingPolicy::Weighted { weight: 1 },
        RoutingPolicy::MultiValue,
    ];
    for policy in policies {
        let set = RecordSetBuilder::new("a.", RecordType::A)
            .value("127.0.0.1")
            .routing(policy.clone(), "One")
            .build();
        let records = records_from_record_set(&set).unwrap();
        assert!(records
            .iter()
            .all(|r| r.extension.as_ref().map(|e| &e.routing) == Some(&policy)));
        assert_eq!(record_set_from_records(&records).unwrap(), set);
    }
}

#[test]
fn health_check_survives_conversion() {
    let set = RecordSetBuilder::new("a.", RecordType::A)
        .value("127.0.0.1")
        .routing(
            RoutingPolicy::Failover {
                state: "PRIMARY".to_string(),
            },
            "failover-Primary",
        )
        .health_check("6bb57c41-879a-42d0-acdd-ed6472f08eb9")
        .build();
    assert_eq!(round_trip(&set), set);
}

#[test]
fn group_name_is_lowercased() {
    let records = vec![a_record("Mixed.Example.Com.", 300, "127.0.0.1")];
    let set = record_set_from_records(&records).unwrap();
    assert_eq!(set.name, "mixed.example.com.");
}

#[test]
fn multiple_values_in_one_set() {
    let records = vec![
        a_record("a.example.com.", 300, "127.0.0.1"),
        a_record("a.example.com.", 300, "127.0.0.2"),
    ];
    let set = record_set_from_records(&records).unwrap();
    assert_eq!(set.values, vec!["127.0.0.1", "127.0.0.2"]);
}

#[test]
fn extension_applies_to_whole_set() {
    let record = extended(
        a_record("a.", 300, "127.0.0.1"),
        RoutingPolicy::Weighted { weight: 1 },
        "One",
    );
    let set = record_set_from_records(&[record]).unwrap();
    assert_eq!(set.set_identifier.as_deref(), Some("One"));
    assert_eq!(set.routing, Some(RoutingPolicy::Weighted { weight: 1 }));
}

#[test]
fn standard_record_keeps_type_and_ttl() {
    let record = ZoneRecord::standard(Record {
        name: "example.com.".to_string(),
        ttl: 3600,
        data: RecordData::Cname {
            target: "www.example.com.".to_string(),
        },
    });
    let set = record_set_from_records(&[record]).unwrap();
    assert_eq!(set.rtype, RecordType::CNAME);
    assert_eq!(set.ttl, Some(3600));
    assert_eq!(set.values, vec!["www.example.com."]);
}
