//! User lookup service implementing [`FindUserQuery`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{FindUserQuery, UserRepository};
use crate::domain::{Error, User, UserId};

/// Service implementing the find-user driving port.
#[derive(Clone)]
pub struct FindUserService<R> {
    users: Arc<R>,
}

impl<R> FindUserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> FindUserQuery for FindUserService<R>
where
    R: UserRepository,
{
    async fn find_user(&self, raw_id: &str) -> Result<Option<User>, Error> {
        let id = match UserId::new(raw_id) {
            Ok(id) => id,
            Err(err) => {
                debug!(raw_id, error = %err, "treating malformed user id as not found");
                return Ok(None);
            }
        };

        self.users.find_by_id(&id).await.map_err(|err| {
            error!(user_id = %id, error = %err, "failed to load user");
            Error::from(err)
        })
    }
}
