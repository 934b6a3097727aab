//! Person persistence contract and the in-memory implementation
//!
//! `PersonStore` is the seam between the business rules and storage: the
//! service only ever talks to `Arc<dyn PersonStore>`, so wiring can swap
//! the SQLite-backed store for the in-memory one in tests.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::errors::{Result, RolodexError};
use crate::model::Person;

/// Persistence contract for Person records
///
/// Lookup by name comes in four contract-equivalent variants: cached
/// prepared statement vs one-shot SQL, each with positional and named
/// parameter binding. Given the same (first, last) pair all four return
/// the same record (or none); the contract tests hold them to that, so
/// drift between the statement-cache path and ad-hoc SQL is caught.
pub trait PersonStore: Send + Sync {
    /// Persist a new Person, assigning its id
    ///
    /// # Errors
    /// * `DuplicateEmail` - If the email is already stored
    fn insert(&self, person: &Person) -> Result<Person>;

    /// Look up a Person by id; None if no record has that id
    fn find_by_id(&self, id: i64) -> Result<Option<Person>>;

    /// Look up a Person by exact email; None if no record matches
    fn find_by_email(&self, email: &str) -> Result<Option<Person>>;

    /// Look up by name: cached statement, positional binding
    fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Option<Person>>;

    /// Look up by name: cached statement, named binding
    fn find_by_name_named(&self, first_name: &str, last_name: &str) -> Result<Option<Person>>;

    /// Look up by name: one-shot SQL on the connection, positional binding
    fn find_by_name_raw(&self, first_name: &str, last_name: &str) -> Result<Option<Person>>;

    /// Look up by name: one-shot SQL on the connection, named binding
    fn find_by_name_raw_named(&self, first_name: &str, last_name: &str)
        -> Result<Option<Person>>;

    /// Overwrite the stored record whose id matches the given Person
    ///
    /// # Errors
    /// * `PersonNotFound` - If no stored record has that id
    /// * `DuplicateEmail` - If the new email collides with another record
    fn update(&self, person: &Person) -> Result<Person>;

    /// Remove the given (previously resolved) record
    ///
    /// # Errors
    /// * `PersonNotFound` - If no stored record has that id
    fn delete(&self, person: &Person) -> Result<()>;

    /// Remove the record with the given id
    ///
    /// # Errors
    /// * `PersonNotFound` - If no stored record has that id
    fn delete_by_id(&self, id: i64) -> Result<()>;

    /// All records in id order (insertion order; stable, not a business
    /// ordering)
    fn find_all(&self) -> Result<Vec<Person>>;
}

/// In-memory Person store
///
/// A `Mutex<BTreeMap>` keyed by id. Ids are assigned from a counter
/// starting at 1, so iteration order is insertion order. Email uniqueness
/// is enforced on the write path, mirroring the SQL store's unique
/// constraint, so both implementations satisfy the same contract tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    rows: BTreeMap<i64, Person>,
    next_id: i64,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<MutexGuard<'_, MemoryInner>> {
        self.inner.lock().map_err(|_| RolodexError::Internal {
            message: "person store mutex poisoned".to_string(),
        })
    }
}

impl MemoryInner {
    fn email_taken_by_other(&self, email: &str, id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|p| p.email == email && p.id != id)
    }

    fn scan_by_name(&self, first_name: &str, last_name: &str) -> Option<Person> {
        self.rows
            .values()
            .find(|p| p.first_name == first_name && p.last_name == last_name)
            .cloned()
    }
}

impl PersonStore for MemoryStore {
    fn insert(&self, person: &Person) -> Result<Person> {
        let mut inner = self.locked()?;
        if inner.email_taken_by_other(&person.email, None) {
            return Err(RolodexError::DuplicateEmail {
                email: person.email.clone(),
            });
        }
        inner.next_id += 1;
        let id = inner.next_id;
        let stored = person.clone().with_id(id);
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Person>> {
        Ok(self.locked()?.rows.get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Person>> {
        Ok(self
            .locked()?
            .rows
            .values()
            .find(|p| p.email == email)
            .cloned())
    }

    // The four name-lookup variants are one scan here; the binding-style
    // distinction only exists for SQL-backed implementations.
    fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Option<Person>> {
        Ok(self.locked()?.scan_by_name(first_name, last_name))
    }

    fn find_by_name_named(&self, first_name: &str, last_name: &str) -> Result<Option<Person>> {
        self.find_by_name(first_name, last_name)
    }

    fn find_by_name_raw(&self, first_name: &str, last_name: &str) -> Result<Option<Person>> {
        self.find_by_name(first_name, last_name)
    }

    fn find_by_name_raw_named(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Person>> {
        self.find_by_name(first_name, last_name)
    }

    fn update(&self, person: &Person) -> Result<Person> {
        let mut inner = self.locked()?;
        let id = person.id.unwrap_or(0);
        if !inner.rows.contains_key(&id) {
            return Err(RolodexError::PersonNotFound { id });
        }
        if inner.email_taken_by_other(&person.email, Some(id)) {
            return Err(RolodexError::DuplicateEmail {
                email: person.email.clone(),
            });
        }
        let stored = person.clone().with_id(id);
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    fn delete(&self, person: &Person) -> Result<()> {
        self.delete_by_id(person.id.unwrap_or(0))
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut inner = self.locked()?;
        if inner.rows.remove(&id).is_none() {
            return Err(RolodexError::PersonNotFound { id });
        }
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Person>> {
        Ok(self.locked()?.rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let store = MemoryStore::new();

        let a = store
            .insert(&Person::new("John", "Doe", "john@x.com"))
            .unwrap();
        let b = store
            .insert(&Person::new("Jane", "Doe", "jane@x.com"))
            .unwrap();

        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[test]
    fn test_insert_rejects_duplicate_email() {
        let store = MemoryStore::new();
        store
            .insert(&Person::new("John", "Doe", "john@x.com"))
            .unwrap();

        let result = store.insert(&Person::new("Johnny", "Doe", "john@x.com"));
        assert_eq!(
            result,
            Err(RolodexError::DuplicateEmail {
                email: "john@x.com".to_string()
            })
        );
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_id_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.find_by_id(99).unwrap(), None);
    }

    #[test]
    fn test_find_by_email() {
        let store = MemoryStore::new();
        let stored = store
            .insert(&Person::new("John", "Doe", "john@x.com"))
            .unwrap();

        assert_eq!(store.find_by_email("john@x.com").unwrap(), Some(stored));
        assert_eq!(store.find_by_email("nobody@x.com").unwrap(), None);
    }

    #[test]
    fn test_name_lookup_variants_agree() {
        let store = MemoryStore::new();
        let stored = store
            .insert(&Person::new("John", "Doe", "john@x.com"))
            .unwrap();

        let hits = [
            store.find_by_name("John", "Doe").unwrap(),
            store.find_by_name_named("John", "Doe").unwrap(),
            store.find_by_name_raw("John", "Doe").unwrap(),
            store.find_by_name_raw_named("John", "Doe").unwrap(),
        ];
        for hit in hits {
            assert_eq!(hit, Some(stored.clone()));
        }

        let misses = [
            store.find_by_name("Jane", "Doe").unwrap(),
            store.find_by_name_named("Jane", "Doe").unwrap(),
            store.find_by_name_raw("Jane", "Doe").unwrap(),
            store.find_by_name_raw_named("Jane", "Doe").unwrap(),
        ];
        for miss in misses {
            assert_eq!(miss, None);
        }
    }

    #[test]
    fn test_update_overwrites_fields_and_keeps_id() {
        let store = MemoryStore::new();
        let stored = store
            .insert(&Person::new("John", "Doe", "john@x.com"))
            .unwrap();

        let updated = store
            .update(&Person::new("Jane", "Doe", "john@x.com").with_id(stored.id.unwrap()))
            .unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.first_name, "Jane");
        assert_eq!(store.find_by_id(stored.id.unwrap()).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let store = MemoryStore::new();
        let result = store.update(&Person::new("Jane", "Doe", "jane@x.com").with_id(5));
        assert_eq!(result, Err(RolodexError::PersonNotFound { id: 5 }));
    }

    #[test]
    fn test_update_rejects_email_of_another_person() {
        let store = MemoryStore::new();
        store
            .insert(&Person::new("John", "Doe", "john@x.com"))
            .unwrap();
        let jane = store
            .insert(&Person::new("Jane", "Doe", "jane@x.com"))
            .unwrap();

        let result =
            store.update(&Person::new("Jane", "Doe", "john@x.com").with_id(jane.id.unwrap()));
        assert_eq!(
            result,
            Err(RolodexError::DuplicateEmail {
                email: "john@x.com".to_string()
            })
        );
    }

    #[test]
    fn test_delete_by_id() {
        let store = MemoryStore::new();
        let stored = store
            .insert(&Person::new("John", "Doe", "john@x.com"))
            .unwrap();

        store.delete_by_id(stored.id.unwrap()).unwrap();
        assert_eq!(store.find_by_id(stored.id.unwrap()).unwrap(), None);

        let result = store.delete_by_id(stored.id.unwrap());
        assert_eq!(
            result,
            Err(RolodexError::PersonNotFound {
                id: stored.id.unwrap()
            })
        );
    }

    #[test]
    fn test_find_all_is_in_insertion_order() {
        let store = MemoryStore::new();
        store
            .insert(&Person::new("John", "Doe", "john@x.com"))
            .unwrap();
        store
            .insert(&Person::new("Jane", "Doe", "jane@x.com"))
            .unwrap();

        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].first_name, "John");
        assert_eq!(all[1].first_name, "Jane");
    }
}
