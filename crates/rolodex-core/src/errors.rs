use thiserror::Error;

/// Result type alias using RolodexError
pub type Result<T> = std::result::Result<T, RolodexError>;

/// Error taxonomy for rolodex operations
///
/// Two of these are recoverable business conditions the boundary maps to
/// client-visible responses (`DuplicateEmail`, `PersonNotFound`); the rest
/// carry infrastructure failures that propagate unrecovered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RolodexError {
    /// A person with the given email already exists
    #[error("person already exists with email: {email}")]
    DuplicateEmail { email: String },

    /// No person has the given id
    #[error("person not found: {id}")]
    PersonNotFound { id: i64 },

    /// Underlying store failure (SQL error, connection failure)
    #[error("persistence error: {message}")]
    Persistence { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl RolodexError {
    /// Get the stable error code for this error
    ///
    /// Codes are part of the external contract: they appear in HTTP error
    /// bodies and can be matched on without parsing messages.
    pub fn code(&self) -> &'static str {
        match self {
            RolodexError::DuplicateEmail { .. } => "ERR_DUPLICATE_EMAIL",
            RolodexError::PersonNotFound { .. } => "ERR_NOT_FOUND",
            RolodexError::Persistence { .. } => "ERR_PERSISTENCE",
            RolodexError::Serialization { .. } => "ERR_SERIALIZATION",
            RolodexError::Internal { .. } => "ERR_INTERNAL",
        }
    }
}

/// Conversion from serde_json::Error to RolodexError
impl From<serde_json::Error> for RolodexError {
    fn from(err: serde_json::Error) -> Self {
        RolodexError::Serialization {
            message: err.to_string(),
        }
    }
}
