//! Rendering records back to tab-delimited zone text.

use zone53_domain::codec::encode_value;
use zone53_domain::names::shorten_name;
use zone53_domain::{
    render_extension, RecordData, RecordEntry, ZoneRecord, ALIAS_CLASS, ALIAS_TYPE,
};

/// Render one record as a zone text line:
/// `name<TAB>ttl<TAB>class<TAB>type<TAB>rdata [; AWS ...]`.
///
/// Unless `full_names` is set, owner names (and CNAME targets) are
/// shortened against the origin.
pub fn format_record(record: &ZoneRecord, origin: &str, full_names: bool) -> String {
    let display_name = |name: &str| {
        if full_names {
            name.to_string()
        } else {
            shorten_name(name, origin)
        }
    };

    let mut line = match &record.entry {
        RecordEntry::Standard(r) => {
            let rdata = match &r.data {
                RecordData::Cname { target } if !full_names => shorten_name(target, origin),
                data => encode_value(data),
            };
            format!(
                "{}\t{}\t{}\t{}\t{}",
                display_name(&r.name),
                r.ttl,
                "IN",
                r.data.rtype(),
                rdata
            )
        }
        RecordEntry::Alias(alias) => format!(
            "{}\t{}\t{}\t{}\t{}",
            display_name(&alias.name),
            alias.ttl,
            ALIAS_CLASS,
            ALIAS_TYPE,
            alias.rdata()
        ),
    };

    if let Some(ref ext) = record.extension {
        line.push(' ');
        line.push_str(&render_extension(ext));
    }
    line
}

/// Render a whole zone: `$ORIGIN` header plus one line per record.
pub fn write_zone_text(records: &[ZoneRecord], origin: &str, full_names: bool) -> String {
    let mut out = format!("$ORIGIN {}\n", origin);
    for record in records {
        out.push_str(&format_record(record, origin, full_names));
        out.push('\n');
    }
    out
}
