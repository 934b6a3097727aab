//! SQLite-backed Person repository

mod person_repo;

pub use person_repo::SqlitePersonStore;
