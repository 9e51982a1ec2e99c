//! Driven port for user persistence adapters and their errors.
//!
//! The create and find services depend on this trait only; the Diesel adapter
//! in `outbound::persistence` is the production implementation.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection {
            /// Pool or driver error description.
            message: String,
        } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Database error description.
            message: String,
        } => "user repository query failed: {message}",
    }
}

impl From<UserPersistenceError> for Error {
    fn from(value: UserPersistenceError) -> Self {
        Error::internal(value.to_string())
    }
}

/// Storage capabilities required by the user services.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a validated candidate and return the store-assigned identifier.
    async fn save(&self, user: &NewUser) -> Result<UserId, UserPersistenceError>;

    /// Report whether a user with exactly this first and last name exists.
    ///
    /// Implementations fail closed: a lookup failure must be logged and
    /// answered with `true` so the caller refuses the write.
    async fn exists_by_name_pair(&self, first_name: &str, last_name: &str) -> bool;

    /// Fetch a user by identifier. A missing row is `Ok(None)`.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;
}

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryUserRepository;

#[cfg(any(test, feature = "test-support"))]
mod in_memory {
    use std::sync::{Mutex, PoisonError};

    use async_trait::async_trait;

    use super::{UserPersistenceError, UserRepository};
    use crate::domain::{NewUser, User, UserId};

    /// Process-local repository used by HTTP round-trip tests.
    ///
    /// Identifiers are random UUIDs, mirroring the database default.
    #[derive(Debug, Default)]
    pub struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUserRepository {
        /// Create an empty repository.
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored users.
        pub fn len(&self) -> usize {
            self.users
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Whether no user has been stored.
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn save(&self, user: &NewUser) -> Result<UserId, UserPersistenceError> {
            let id = UserId::random();
            self.users
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(User::new(id, user.clone()));
            Ok(id)
        }

        async fn exists_by_name_pair(&self, first_name: &str, last_name: &str) -> bool {
            self.users
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .any(|user| user.first_name() == first_name && user.last_name() == last_name)
        }

        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
            Ok(self
                .users
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .find(|user| user.id() == id)
                .cloned())
        }
    }
}
