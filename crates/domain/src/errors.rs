use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ZoneError {
    #[error("Extension grammar error: {0}")]
    Grammar(String),

    #[error("Unsupported resource record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Bad {rtype} record value: {value}")]
    BadRecordValue { rtype: String, value: String },

    #[error("Bad zone file line: {0}")]
    BadZoneLine(String),

    #[error("Zone '{0}' not found")]
    ZoneNotFound(String),

    #[error("Multiple zones match '{0}' - use the zone ID to uniquely identify the zone")]
    AmbiguousZone(String),

    #[error("Routing configuration conflict: {0}")]
    RoutingConflict(String),

    #[error("Zone directory error: {0}")]
    Provider(String),

    #[error("I/O error: {0}")]
    Io(String),
}
