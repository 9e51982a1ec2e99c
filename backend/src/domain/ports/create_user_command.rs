//! Driving port for user creation.
//!
//! Inbound adapters call this port with a decoded candidate and render the
//! outcome. Rejections are expected results, not errors: only storage
//! failures surface as [`Error`].

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, ValidationError};

/// Result of a create attempt that reached the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateUserOutcome {
    /// The candidate was persisted and received an identifier.
    Created(User),
    /// The candidate failed one or more rules; nothing was written.
    Rejected(ValidationError),
}

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateUserCommand: Send + Sync {
    /// Validate and persist a candidate user.
    async fn create_user(&self, candidate: NewUser) -> Result<CreateUserOutcome, Error>;
}
