//! Internal Diesel row structs for the users table.
//!
//! These never leave the persistence layer; the repository converts them to
//! domain types.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::users;

/// Row read from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
}

/// Insertable user; `id` and `created_at` come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub age: i64,
}
