//! Shared helpers for integration tests.

use std::sync::{Mutex, OnceLock};

use user_service::domain::NewUser;
use user_service::outbound::persistence::run_pending_migrations;
use uuid::Uuid;

/// Environment variable naming a disposable PostgreSQL database.
pub const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";

static MIGRATED: OnceLock<Mutex<bool>> = OnceLock::new();

/// Return the test database URL with migrations applied, or `None` after
/// printing a skip marker when the variable is unset.
#[expect(clippy::print_stderr, reason = "skip marker is read from test output")]
pub fn migrated_test_database() -> Option<String> {
    let Ok(url) = std::env::var(TEST_DATABASE_URL) else {
        eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL} is not set");
        return None;
    };

    let mut migrated = MIGRATED
        .get_or_init(|| Mutex::new(false))
        .lock()
        .unwrap_or_else(|err| err.into_inner());
    if !*migrated {
        run_pending_migrations(&url).expect("migrations apply to test database");
        *migrated = true;
    }
    Some(url)
}

/// A valid candidate whose name pair is unique to this call.
pub fn unique_candidate() -> NewUser {
    let suffix = Uuid::new_v4().simple().to_string();
    NewUser {
        first_name: format!("Ada-{suffix}"),
        last_name: format!("Lovelace-{suffix}"),
        email: "ada@engine.org".to_owned(),
        age: 36,
    }
}
