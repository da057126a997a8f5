//! Recordings - HTTP access to a music album catalog
//!
//! This library exposes a small JSON-over-HTTP surface backed by a single
//! relational `album` table, with one storage function per SQL statement.

/// Runtime configuration read from the environment
pub mod config;
/// HTTP router and handlers
pub mod http;
/// Album storage backed by `DuckDB`
pub mod store;
