//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors returned when parsing a [`UserId`] from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIdError {
    /// The identifier was an empty string.
    Empty,
    /// The identifier is not a UUID.
    Invalid,
}

impl fmt::Display for UserIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "user id must not be empty"),
            Self::Invalid => write!(f, "user id must be a valid UUID"),
        }
    }
}

impl std::error::Error for UserIdError {}

/// Database-assigned user identifier stored as a UUID.
///
/// Serialises as the canonical hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a [`UserId`] from its textual form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserIdError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserIdError::Empty);
        }
        if id.trim() != id {
            return Err(UserIdError::Invalid);
        }

        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserIdError::Invalid)
    }

    /// Wrap a UUID handed back by the persistence layer.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Candidate user awaiting creation.
///
/// Fields are unvalidated; the validation engine inspects them before the
/// candidate may be persisted. A candidate never carries an identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Age in whole years.
    pub age: i64,
}

/// Persisted user.
///
/// ## Invariants
/// - `id` is always present and was assigned by the store.
/// - The remaining fields passed validation before the record was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: String,
    age: i64,
}

impl User {
    /// Attach a store-assigned identifier to the submitted fields.
    pub fn new(id: UserId, fields: NewUser) -> Self {
        let NewUser {
            first_name,
            last_name,
            email,
            age,
        } = fields;
        Self {
            id,
            first_name,
            last_name,
            email,
            age,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Age in whole years.
    pub fn age(&self) -> i64 {
        self.age
    }
}
