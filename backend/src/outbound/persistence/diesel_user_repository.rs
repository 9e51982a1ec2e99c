//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! The adapter only translates between Diesel rows and domain types. The
//! name-pair lookup is fail-closed: when the query cannot run, the pair is
//! reported as taken so no duplicate can slip through.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::error;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn lookup_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(exists(
            users::table
                .filter(users::first_name.eq(first_name))
                .filter(users::last_name.eq(last_name)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Collapse a lookup result into the fail-closed answer.
fn fail_closed(result: Result<bool, UserPersistenceError>) -> bool {
    result.unwrap_or_else(|err| {
        error!(error = %err, "name-pair lookup failed; treating name as taken");
        true
    })
}

fn row_to_user(row: UserRow) -> User {
    User::new(
        UserId::from_uuid(row.id),
        NewUser {
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            age: row.age,
        },
    )
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn save(&self, user: &NewUser) -> Result<UserId, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            first_name: &user.first_name,
            last_name: &user.last_name,
            email: &user.email,
            age: user.age,
        };

        diesel::insert_into(users::table)
            .values(&row)
            .returning(users::id)
            .get_result(&mut conn)
            .await
            .map(UserId::from_uuid)
            .map_err(map_diesel_error)
    }

    async fn exists_by_name_pair(&self, first_name: &str, last_name: &str) -> bool {
        fail_closed(self.lookup_name_pair(first_name, last_name).await)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(row_to_user))
            .map_err(map_diesel_error)
    }
}
