//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums and idempotent application
//! - Embedded SQL migrations
//!
//! Migrations run automatically when the store opens; there is no
//! user-facing migration surface.

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
