use serde::{Deserialize, Serialize};

/// Person - a single directory entry
///
/// The id is assigned by the store on first insert; callers never supply it
/// on create. Email is unique across the whole directory, enforced both by
/// the service pre-check and by the store's unique constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Store-assigned identifier (None until first persisted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact e-mail, unique across all persons
    pub email: String,
}

impl Person {
    /// Create a new, not-yet-persisted Person
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Return this Person with the given store-assigned id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Check whether this Person has been persisted (has an id)
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
