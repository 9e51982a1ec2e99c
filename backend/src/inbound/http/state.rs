//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on the driving
//! ports, so they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{CreateUserCommand, FindUserQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Validates and persists new users.
    pub create_user: Arc<dyn CreateUserCommand>,
    /// Looks users up by identifier.
    pub find_user: Arc<dyn FindUserQuery>,
}

impl HttpState {
    /// Bundle the user use-case ports.
    pub fn new(create_user: Arc<dyn CreateUserCommand>, find_user: Arc<dyn FindUserQuery>) -> Self {
        Self {
            create_user,
            find_user,
        }
    }
}
