//! Business rules for the Person resource
//!
//! The service owns the two decision points of the system: duplicate-email
//! rejection on create and existence enforcement on read/update/delete.
//! Everything else is delegated to the store unchanged.

use std::sync::Arc;

use tracing::info;

use crate::errors::{Result, RolodexError};
use crate::model::Person;
use crate::store::PersonStore;

/// Person business-rule layer over a swappable store
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn PersonStore>,
}

impl PersonService {
    /// Create a service over the given store
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Create a new Person
    ///
    /// The email pre-check here is advisory; the store's unique constraint
    /// is the enforcement point of record and surfaces the same error under
    /// a concurrent insert of the same email. The store's insert is never
    /// called when the pre-check finds the email taken.
    ///
    /// # Errors
    /// * `DuplicateEmail` - If a person with this email is already stored
    pub fn create(&self, person: Person) -> Result<Person> {
        info!(email = %person.email, "creating person");

        if let Some(existing) = self.store.find_by_email(&person.email)? {
            return Err(RolodexError::DuplicateEmail {
                email: existing.email,
            });
        }
        self.store.insert(&person)
    }

    /// List every stored Person, unfiltered
    pub fn find_all(&self) -> Result<Vec<Person>> {
        info!("listing all persons");
        self.store.find_all()
    }

    /// Find a Person by id
    ///
    /// # Errors
    /// * `PersonNotFound` - If no person has the given id
    pub fn find_by_id(&self, id: i64) -> Result<Person> {
        info!(id, "finding person by id");
        self.store
            .find_by_id(id)?
            .ok_or(RolodexError::PersonNotFound { id })
    }

    /// Update an existing Person
    ///
    /// Resolves the stored record by the incoming id, then copies
    /// first/last name and email onto it; the incoming id is only used for
    /// the lookup. A payload without an id cannot match any stored record
    /// (ids start at 1), so it fails the same lookup.
    ///
    /// # Errors
    /// * `PersonNotFound` - If the incoming id resolves to no record
    /// * `DuplicateEmail` - If the new email collides with another record
    pub fn update(&self, incoming: &Person) -> Result<Person> {
        info!(id = ?incoming.id, "updating person");

        let mut entity = self.find_by_id(incoming.id.unwrap_or(0))?;
        entity.first_name = incoming.first_name.clone();
        entity.last_name = incoming.last_name.clone();
        entity.email = incoming.email.clone();

        self.store.update(&entity)
    }

    /// Delete a Person by id
    ///
    /// Resolves the record first, then deletes the resolved record (not
    /// merely the id).
    ///
    /// # Errors
    /// * `PersonNotFound` - If no person has the given id
    pub fn delete(&self, id: i64) -> Result<()> {
        info!(id, "deleting person");

        let entity = self.find_by_id(id)?;
        self.store.delete(&entity)
    }
}
