//! Rolodex Store - SQLite persistence for the person directory
//!
//! Provides the SQLite-backed implementation of the `PersonStore`
//! contract, plus connection management and embedded schema migrations
//! (checksummed, idempotent, applied automatically when the store opens).

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

pub use repo::SqlitePersonStore;
