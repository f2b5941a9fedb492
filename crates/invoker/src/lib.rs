//! `db-action-invoker` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod report;
pub mod transport;
