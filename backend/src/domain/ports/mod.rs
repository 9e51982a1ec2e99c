//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod create_user_command;
mod find_user_query;
mod user_repository;

#[cfg(test)]
pub use create_user_command::MockCreateUserCommand;
pub use create_user_command::{CreateUserCommand, CreateUserOutcome};
#[cfg(test)]
pub use find_user_query::MockFindUserQuery;
pub use find_user_query::FindUserQuery;
#[cfg(any(test, feature = "test-support"))]
pub use user_repository::InMemoryUserRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
