//! repairdesk - a small HTTP service tracking computer repair tickets
//!
//! Five routes over one relational table, backed by a pooled SQLite
//! connection.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod tickets;
