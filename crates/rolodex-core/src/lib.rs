//! Rolodex Core - Person directory domain model and business rules
//!
//! This crate provides the foundations the rest of the workspace builds on:
//! - The Person model and its identity/uniqueness rules
//! - The `PersonStore` persistence contract plus an in-memory implementation
//! - The `PersonService` business rules (duplicate-email rejection on
//!   create, existence enforcement on read/update/delete, field-level merge
//!   on update)
//! - The error taxonomy with stable error codes
//! - Request correlation ids and logging bootstrap

pub mod correlation;
pub mod errors;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use correlation::RequestId;
pub use errors::{Result, RolodexError};
pub use model::Person;
pub use service::PersonService;
pub use store::{MemoryStore, PersonStore};
