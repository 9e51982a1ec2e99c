//! User creation service.
//!
//! Implements [`CreateUserCommand`]: run the field rules, ask the repository
//! whether the name pair is taken, then persist the candidate only when no
//! rule failed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{CreateUserCommand, CreateUserOutcome, UserRepository};
use crate::domain::{
    Error, NewUser, User, UserValidationFailure, ValidationError, validate_new_user,
};

/// Service implementing the create-user driving port.
#[derive(Clone)]
pub struct CreateUserService<R> {
    users: Arc<R>,
}

impl<R> CreateUserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R> CreateUserService<R>
where
    R: UserRepository,
{
    async fn collect_failures(&self, candidate: &NewUser) -> Vec<UserValidationFailure> {
        let mut failures = validate_new_user(candidate);
        if self
            .users
            .exists_by_name_pair(&candidate.first_name, &candidate.last_name)
            .await
        {
            failures.push(UserValidationFailure::NameUnique);
        }
        failures
    }
}

#[async_trait]
impl<R> CreateUserCommand for CreateUserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, candidate: NewUser) -> Result<CreateUserOutcome, Error> {
        let failures = self.collect_failures(&candidate).await;
        if !failures.is_empty() {
            let rejection = ValidationError::from_failures(failures);
            debug!(details = ?rejection.details(), "user candidate rejected");
            return Ok(CreateUserOutcome::Rejected(rejection));
        }

        let id = self.users.save(&candidate).await.map_err(|err| {
            error!(error = %err, "failed to persist user");
            Error::from(err)
        })?;

        Ok(CreateUserOutcome::Created(User::new(id, candidate)))
    }
}

#[cfg(test)]
#[path = "create_user_service_tests.rs"]
mod tests;
