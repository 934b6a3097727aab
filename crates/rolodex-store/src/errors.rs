//! Error handling for rolodex-store
//!
//! Wraps rolodex-core's RolodexError with store-specific helpers

use rolodex_core::RolodexError;

/// Result type alias using RolodexError
pub type Result<T> = rolodex_core::Result<T>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> RolodexError {
    RolodexError::Persistence {
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> RolodexError {
    RolodexError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Map a write-path error, attributing unique-constraint violations to the
/// email column
///
/// The `tb_person.email` unique constraint is the enforcement point of
/// record for email uniqueness; the service-level pre-check is advisory.
pub fn map_constraint(err: rusqlite::Error, email: &str) -> RolodexError {
    if is_unique_violation(&err) {
        RolodexError::DuplicateEmail {
            email: email.to_string(),
        }
    } else {
        from_rusqlite(err)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
