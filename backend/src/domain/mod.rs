//! Domain entities, validation rules, ports and application services.
//!
//! Public surface:
//! - [`NewUser`], [`User`], [`UserId`]: the user entity before and after
//!   persistence.
//! - [`validate_new_user`] and [`ValidationError`]: pure field rules and the
//!   rejection payload they produce.
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failures.
//! - [`CreateUserService`] and [`FindUserService`]: implementations of the
//!   driving ports in [`ports`].

pub mod error;
pub mod ports;
pub mod user;
pub mod user_validation;

mod create_user_service;
mod find_user_service;

pub use self::create_user_service::CreateUserService;
pub use self::error::{Error, ErrorCode};
pub use self::find_user_service::FindUserService;
pub use self::user::{NewUser, User, UserId, UserIdError};
pub use self::user_validation::{
    MINIMUM_AGE, UserValidationFailure, VALIDATION_FAILED_MESSAGE, ValidationError,
    validate_new_user,
};
