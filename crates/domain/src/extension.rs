//! The provider extension grammar embedded in zone file comments.
//!
//! A comment of the form `; AWS key="value" key=123 ...` attaches routing
//! metadata to the record it trails. The grammar is a flat sequence of
//! `key=value` pairs separated by whitespace, where a value is either a
//! decimal integer or a double-quoted string with `\"` and `\\` escapes.

use crate::errors::ZoneError;
use crate::names::quote;
use crate::routing::RoutingPolicy;
use std::fmt;
use tracing::warn;

/// Reserved comment prefix that introduces the extension grammar.
pub const EXTENSION_MARKER: &str = "; AWS ";

const KEY_IDENTIFIER: &str = "identifier";
const KEY_HEALTH_CHECK: &str = "healthCheckId";
const KEY_ROUTING: &str = "routing";

/// Cursor over the input with single-step backtracking.
struct Lexer<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
    width: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            input,
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    fn next(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    fn backup(&mut self) {
        self.pos -= self.width;
    }

    fn emit(&mut self) -> &'a str {
        let ret = &self.input[self.start..self.pos];
        self.start = self.pos;
        ret
    }

    fn accept(&mut self, valid: char) -> bool {
        if self.next() == Some(valid) {
            self.emit();
            return true;
        }
        self.backup();
        false
    }

    fn accept_any(&mut self) -> &'a str {
        self.next();
        self.emit()
    }

    fn accept_run(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        while let Some(c) = self.next() {
            if !pred(c) {
                self.backup();
                break;
            }
        }
        self.emit()
    }

    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Error annotated with the offending position:
    /// `msg: before[current]after`.
    fn error(&self, msg: &str) -> ZoneError {
        ZoneError::Grammar(format!(
            "{}: {}[{}]{}",
            msg,
            &self.input[..self.start],
            &self.input[self.start..self.pos],
            &self.input[self.pos..]
        ))
    }
}

/// A single parsed value: quoted string or bare decimal integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KvValue {
    Str(String),
    Int(i64),
}

/// Ordered key/value sequence. Duplicate keys are allowed positionally;
/// lookups return the first entry whose key and value kind both match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValues(Vec<(String, KvValue)>);

impl KeyValues {
    pub fn new() -> Self {
        KeyValues(Vec::new())
    }

    pub fn push_str(&mut self, key: &str, value: impl Into<String>) {
        self.0.push((key.to_string(), KvValue::Str(value.into())));
    }

    pub fn push_int(&mut self, key: &str, value: i64) {
        self.0.push((key.to_string(), KvValue::Int(value)));
    }

    pub fn get_opt_str(&self, key: &str) -> Option<String> {
        self.0.iter().find_map(|(k, v)| match v {
            KvValue::Str(s) if k == key => Some(s.clone()),
            _ => None,
        })
    }

    pub fn get_str(&self, key: &str) -> String {
        self.get_opt_str(key).unwrap_or_default()
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.0
            .iter()
            .find_map(|(k, v)| match v {
                KvValue::Int(n) if k == key => Some(*n),
                _ => None,
            })
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match value {
                KvValue::Str(s) => write!(f, "{}={}", key, quote(s))?,
                KvValue::Int(n) => write!(f, "{}={}", key, n)?,
            }
        }
        Ok(())
    }
}

/// Parse the restricted `key=value` grammar.
pub fn parse_key_values(input: &str) -> Result<KeyValues, ZoneError> {
    let mut l = Lexer::new(input);
    let mut result = KeyValues::new();

    loop {
        let key = l.accept_run(|c| c.is_alphabetic());
        if key.is_empty() {
            return Err(l.error("Expected key"));
        }
        let key = key.to_string();

        if !l.accept('=') {
            return Err(l.error("Expected ="));
        }

        if l.accept('"') {
            // quoted string
            let mut s = String::new();
            loop {
                if l.eof() {
                    return Err(l.error("Unterminated quoted string"));
                } else if l.accept('\\') {
                    s.push_str(l.accept_any());
                } else if l.accept('"') {
                    break;
                } else {
                    s.push_str(l.accept_any());
                }
            }
            result.0.push((key, KvValue::Str(s)));
        } else {
            let num = l.accept_run(|c| c.is_ascii_digit());
            if num.is_empty() {
                return Err(l.error("Unexpected token"));
            }
            let n: i64 = num
                .parse()
                .map_err(|e| ZoneError::Grammar(format!("{}", e)))?;
            result.0.push((key, KvValue::Int(n)));
        }

        if l.eof() {
            break;
        }
        if l.accept_run(|c| c.is_whitespace()).is_empty() {
            return Err(l.error("Expected whitespace"));
        }
    }

    Ok(result)
}

/// Routing metadata attached to a record by an extension comment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AwsExtension {
    pub routing: RoutingPolicy,
    pub set_identifier: String,
    pub health_check_id: Option<String>,
}

/// Parse a trailing zone file comment into an extension, if it carries one.
///
/// Grammar errors and unknown routing strategies are tolerated: the record
/// is kept as an ordinary record and the extension dropped with a warning.
pub fn parse_extension(comment: &str) -> Option<AwsExtension> {
    let body = comment.strip_prefix(EXTENSION_MARKER)?;
    let kvs = match parse_key_values(body) {
        Ok(kvs) => kvs,
        Err(err) => {
            warn!("parse AWS extension: {}", err);
            return None;
        }
    };
    let routing_name = kvs.get_str(KEY_ROUTING);
    match RoutingPolicy::from_key_values(&routing_name, &kvs) {
        Some(routing) => Some(AwsExtension {
            routing,
            set_identifier: kvs.get_str(KEY_IDENTIFIER),
            health_check_id: kvs.get_opt_str(KEY_HEALTH_CHECK),
        }),
        None => {
            warn!(
                "parse AWS extension - routing=\"{}\" not understood",
                routing_name
            );
            None
        }
    }
}

/// Render the canonical extension comment for a record.
pub fn render_extension(ext: &AwsExtension) -> String {
    let mut trailer = KeyValues::new();
    if let Some(ref health_check_id) = ext.health_check_id {
        trailer.push_str(KEY_HEALTH_CHECK, health_check_id.clone());
    }
    trailer.push_str(KEY_IDENTIFIER, ext.set_identifier.clone());
    format!(
        "{}{} {}",
        EXTENSION_MARKER,
        ext.routing.to_key_values(),
        trailer
    )
}
