//! Driving port for user lookups.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for fetching a user by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FindUserQuery: Send + Sync {
    /// Look up a user from the raw path identifier.
    ///
    /// Malformed identifiers and missing rows both yield `Ok(None)`.
    async fn find_user(&self, raw_id: &str) -> Result<Option<User>, Error>;
}
