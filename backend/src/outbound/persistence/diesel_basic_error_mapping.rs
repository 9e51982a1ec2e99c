//! Shared Diesel error mapping for repositories with basic query semantics.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message }
        | PoolError::Build { message }
        | PoolError::Ping { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into query or connection constructors.
///
/// A closed connection is a connection failure; everything else is a query
/// failure carrying the Diesel message.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            connection(info.message().to_owned())
        }
        other => query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    fn map(error: DieselError) -> Mapped {
        map_basic_diesel_error(error, Mapped::Query, Mapped::Connection)
    }

    #[rstest]
    fn closed_connection_is_a_connection_failure() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert_eq!(
            map(error),
            Mapped::Connection("server closed the connection".to_owned())
        );
    }

    #[rstest]
    fn other_database_errors_are_query_failures() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_owned()),
        );
        assert_eq!(map(error), Mapped::Query("duplicate key".to_owned()));
    }

    #[rstest]
    fn not_found_is_a_query_failure() {
        assert!(matches!(map(DieselError::NotFound), Mapped::Query(_)));
    }

    #[rstest]
    #[case(PoolError::checkout("timed out"))]
    #[case(PoolError::build("bad url"))]
    #[case(PoolError::ping("no route"))]
    fn pool_errors_keep_their_message(#[case] error: PoolError) {
        let expected = match &error {
            PoolError::Checkout { message }
            | PoolError::Build { message }
            | PoolError::Ping { message } => message.clone(),
        };
        let mapped: Mapped = map_basic_pool_error(error, Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection(expected));
    }
}
