//! Field-level validation rules for candidate users.
//!
//! The engine is pure: it inspects a [`NewUser`] and reports every failed
//! rule in a fixed order (age, email, names). Uniqueness needs storage and is
//! appended by the create service after these checks.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::NewUser;

/// Minimum age a user must have to be created.
pub const MINIMUM_AGE: i64 = 18;

/// Summary message attached to every validation failure response.
pub const VALIDATION_FAILED_MESSAGE: &str = "User did not pass validation";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Lowercase only: mixed-case addresses are rejected.
        let pattern = r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// A single failed user rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserValidationFailure {
    /// Age is below [`MINIMUM_AGE`].
    AgeMinimum,
    /// Email is empty.
    EmailRequired,
    /// Email does not match the accepted format.
    EmailFormat,
    /// First or last name is empty.
    NameRequired,
    /// Another user already has the same first and last name.
    NameUnique,
}

impl UserValidationFailure {
    /// Human-readable detail returned to clients.
    pub const fn message(self) -> &'static str {
        match self {
            Self::AgeMinimum => "user does not meet minimum age requirement",
            Self::EmailRequired => "user email required",
            Self::EmailFormat => "user email must be properly formatted",
            Self::NameRequired => "user first/last names required",
            Self::NameUnique => "user with the same first and last name already exists",
        }
    }
}

impl fmt::Display for UserValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

fn check_age(age: i64) -> Option<UserValidationFailure> {
    (age < MINIMUM_AGE).then_some(UserValidationFailure::AgeMinimum)
}

fn check_email(email: &str) -> Option<UserValidationFailure> {
    if email.is_empty() {
        return Some(UserValidationFailure::EmailRequired);
    }
    (!email_regex().is_match(email)).then_some(UserValidationFailure::EmailFormat)
}

fn check_names(first_name: &str, last_name: &str) -> Option<UserValidationFailure> {
    (first_name.is_empty() || last_name.is_empty()).then_some(UserValidationFailure::NameRequired)
}

/// Evaluate every field rule against `candidate`.
///
/// All rules run; the result lists failures in evaluation order and is empty
/// when the candidate is valid.
///
/// # Examples
/// ```
/// use user_service::domain::{NewUser, UserValidationFailure, validate_new_user};
///
/// let candidate = NewUser {
///     first_name: String::new(),
///     last_name: "Johnson".to_owned(),
///     email: "j@j.com".to_owned(),
///     age: 30,
/// };
/// assert_eq!(
///     validate_new_user(&candidate),
///     vec![UserValidationFailure::NameRequired]
/// );
/// ```
pub fn validate_new_user(candidate: &NewUser) -> Vec<UserValidationFailure> {
    [
        check_age(candidate.age),
        check_email(&candidate.email),
        check_names(&candidate.first_name, &candidate.last_name),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Rejection of a candidate user: a summary plus one detail per failure.
///
/// Details are kept as strings because request decoding failures are
/// reported through the same shape with free-form text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    details: Vec<String>,
}

impl ValidationError {
    /// Build a rejection from failed rules, preserving their order.
    pub fn from_failures(failures: impl IntoIterator<Item = UserValidationFailure>) -> Self {
        Self {
            details: failures
                .into_iter()
                .map(|failure| failure.message().to_owned())
                .collect(),
        }
    }

    /// Build a rejection carrying a single free-form detail.
    pub fn from_detail(detail: impl Into<String>) -> Self {
        Self {
            details: vec![detail.into()],
        }
    }

    /// Summary message.
    pub fn message(&self) -> &'static str {
        VALIDATION_FAILED_MESSAGE
    }

    /// Ordered failure details.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Consume the rejection and return its details.
    pub fn into_details(self) -> Vec<String> {
        self.details
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message(), self.details.join(", "))
    }
}
