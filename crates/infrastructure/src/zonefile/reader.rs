//! Line-oriented reader for the BIND subset the provider round-trips.
//!
//! Supported: `$ORIGIN` and `$TTL` directives, blank and comment lines,
//! and data lines of the form `name [ttl] [class] type rdata...` with an
//! optional trailing `; AWS` extension comment. Full BIND features
//! (parentheses, includes, generate) are out of scope.

use zone53_domain::names::{absolute, qualify_name, split_fields};
use zone53_domain::{
    parse_extension, AliasRecord, Record, RecordType, ZoneError, ZoneRecord, ALIAS_CLASS,
    ALIAS_TYPE,
};
use zone53_domain::codec::decode_value;

const DEFAULT_TTL: u32 = 3600;

/// Parse zone text into records, qualifying names against the origin.
pub fn parse_zone_text(input: &str, origin: &str) -> Result<Vec<ZoneRecord>, ZoneError> {
    let mut origin = absolute(origin);
    let mut default_ttl = DEFAULT_TTL;
    let mut records = Vec::new();

    for (lineno, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("$ORIGIN") {
            origin = absolute(rest.trim());
            continue;
        }
        if let Some(rest) = line.strip_prefix("$TTL") {
            default_ttl = rest
                .trim()
                .parse()
                .map_err(|_| bad_line(lineno, raw, "bad $TTL value"))?;
            continue;
        }

        let (data, comment) = split_comment(line);
        let record = parse_line(data, &origin, default_ttl)
            .map_err(|err| annotate(lineno, raw, err))?;
        let record = match comment.and_then(parse_extension) {
            Some(ext) => record.with_extension(ext),
            None => record,
        };
        records.push(record);
    }
    Ok(records)
}

fn bad_line(lineno: usize, raw: &str, msg: &str) -> ZoneError {
    ZoneError::BadZoneLine(format!("line {}: {}: {}", lineno + 1, msg, raw.trim()))
}

fn annotate(lineno: usize, raw: &str, err: ZoneError) -> ZoneError {
    match err {
        ZoneError::BadZoneLine(msg) => {
            ZoneError::BadZoneLine(format!("line {}: {}: {}", lineno + 1, msg, raw.trim()))
        }
        other => other,
    }
}

/// Split a data line at the first `;` outside quotes.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => return (line[..i].trim_end(), Some(line[i..].trim_end())),
            _ => {}
        }
    }
    (line, None)
}

fn parse_line(data: &str, origin: &str, default_ttl: u32) -> Result<ZoneRecord, ZoneError> {
    let tokens = split_fields(data);
    let mut idx = 0;
    let name = tokens
        .first()
        .ok_or_else(|| ZoneError::BadZoneLine("missing owner name".to_string()))?;
    let name = qualify_name(name, origin);
    idx += 1;

    let mut ttl = default_ttl;
    if let Some(parsed) = tokens.get(idx).and_then(|t| t.parse::<u32>().ok()) {
        ttl = parsed;
        idx += 1;
    }

    let mut class = "IN";
    match tokens.get(idx).map(String::as_str) {
        Some(c) if c.eq_ignore_ascii_case("IN") => idx += 1,
        Some(c) if c.eq_ignore_ascii_case(ALIAS_CLASS) => {
            class = ALIAS_CLASS;
            idx += 1;
        }
        Some(c) if c.eq_ignore_ascii_case("CH") || c.eq_ignore_ascii_case("HS") => {
            return Err(ZoneError::BadZoneLine(format!("unsupported class {}", c)));
        }
        _ => {}
    }

    let type_token = tokens
        .get(idx)
        .ok_or_else(|| ZoneError::BadZoneLine("missing record type".to_string()))?;
    idx += 1;
    let mut rdata: Vec<String> = tokens[idx..].to_vec();

    if class == ALIAS_CLASS || type_token == ALIAS_TYPE {
        if class != ALIAS_CLASS || type_token != ALIAS_TYPE {
            return Err(ZoneError::BadZoneLine(format!(
                "ALIAS records use class {} and type {}",
                ALIAS_CLASS, ALIAS_TYPE
            )));
        }
        return Ok(ZoneRecord::alias(AliasRecord::from_rdata(&name, ttl, &rdata)?));
    }

    let rtype: RecordType = type_token.parse()?;
    qualify_rdata_names(rtype, &mut rdata, origin);
    let data = decode_value(rtype, &rdata.join(" "))?;
    Ok(ZoneRecord::standard(Record { name, ttl, data }))
}

/// Qualify relative names inside the rdata before decoding, so a bare
/// `www` under `example.com.` does not end up as the absolute `www.`.
fn qualify_rdata_names(rtype: RecordType, rdata: &mut [String], origin: &str) {
    let qualify_at = |rdata: &mut [String], i: usize, origin: &str| {
        if let Some(token) = rdata.get_mut(i) {
            if token != "." {
                *token = qualify_name(token, origin);
            }
        }
    };
    match rtype {
        RecordType::CNAME | RecordType::NS | RecordType::PTR => qualify_at(rdata, 0, origin),
        RecordType::MX => qualify_at(rdata, 1, origin),
        RecordType::SRV => qualify_at(rdata, 3, origin),
        RecordType::SOA => {
            qualify_at(rdata, 0, origin);
            qualify_at(rdata, 1, origin);
        }
        RecordType::NAPTR => qualify_at(rdata, 5, origin),
        _ => {}
    }
}
