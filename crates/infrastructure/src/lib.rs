//! # zone53 Infrastructure Layer
//!
//! Adapters behind the application ports: the zone text reader and
//! writer, and an in-memory zone directory with JSON snapshot
//! persistence.

pub mod directory;
pub mod zonefile;
