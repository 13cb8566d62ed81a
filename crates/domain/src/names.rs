//! Name qualification and quoting helpers shared by the codec and the
//! zone text adapters.

use regex::Regex;
use std::sync::OnceLock;

/// Qualify a possibly-relative name against the zone origin.
///
/// `""` and `"@"` mean the origin itself; a name without a trailing dot is
/// relative and gets the origin appended.
pub fn qualify_name(name: &str, origin: &str) -> String {
    if name.is_empty() || name == "@" {
        origin.to_string()
    } else if !name.ends_with('.') {
        format!("{}.{}", name, origin)
    } else {
        name.to_string()
    }
}

/// Shortened form of a name with the origin removed or abbreviated.
///
/// The origin must sit on a label boundary: `badexample.com.` under
/// `example.com.` is a different name and stays as it is.
pub fn shorten_name(name: &str, origin: &str) -> String {
    if name == origin {
        "@".to_string()
    } else if let Some(prefix) = name
        .strip_suffix(origin)
        .and_then(|p| p.strip_suffix('.'))
    {
        prefix.to_string()
    } else {
        name.to_string()
    }
}

/// The provider always treats target names as absolute, even when they are
/// missing the ending period.
pub fn absolute(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Undo the provider's octet escapes for `*` and `/` in listed names.
pub fn unescape_name(s: &str) -> String {
    s.replace("\\052", "*").replace("\\057", "/")
}

/// Zone name for display and comparison: trailing dot removed, provider
/// octet escapes undone.
pub fn zone_name(s: &str) -> String {
    unescape_name(s.trim_end_matches('.'))
}

fn zone_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^(/hostedzone/)?[A-Z0-9]{12,}$").unwrap())
}

pub fn is_zone_id(s: &str) -> bool {
    zone_id_re().is_match(s)
}

/// Quote a string for a provider value, backslash-escaping `\` and `"`.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Remove outside quotes and unescape backslashed characters.
pub fn unquote(s: &str) -> String {
    let inner = match (s.find('"'), s.rfind('"')) {
        (Some(start), Some(end)) if start < end => &s[start + 1..end],
        _ => s,
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Quote each value and join with spaces, the provider representation of a
/// multi-chunk TXT/SPF value.
pub fn quote_values(vals: &[String]) -> String {
    vals.iter()
        .map(|v| quote(v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a provider value of quoted chunks, respecting backslash escapes.
///
/// Accepts either a single quoted chunk or several space-separated ones.
/// A non-empty value without any quoting is kept as one chunk, matching how
/// zone file parsers read bare TXT rdata.
pub fn split_quoted_values(s: &str) -> Vec<String> {
    if !s.contains('"') {
        let bare = s.trim();
        if bare.is_empty() {
            return Vec::new();
        }
        return vec![bare.to_string()];
    }
    let mut values = Vec::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '"' {
            continue;
        }
        let mut chunk = String::new();
        loop {
            match chars.next() {
                Some('\\') => {
                    if let Some(escaped) = chars.next() {
                        chunk.push(escaped);
                    }
                }
                Some('"') | None => break,
                Some(other) => chunk.push(other),
            }
        }
        values.push(chunk);
    }
    values
}

/// Tokenize a string on whitespace while keeping quoted runs (with their
/// quotes) as single tokens.
pub fn split_fields(s: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;
    for c in s.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => {
                current.push(c);
                escaped = true;
            }
            '"' => {
                current.push(c);
                in_quotes = !in_quotes;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
