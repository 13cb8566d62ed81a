//! zone53 Application Layer
//!
//! Use cases and ports around the zone directory: grouping, the
//! reconciliation diff engine, self-alias rewriting and the import/export
//! pipelines. Each invocation is a single synchronous pass; the only await
//! points are directory round trips.
pub mod ports;
pub mod services;
pub mod use_cases;
