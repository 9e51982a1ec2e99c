//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// Registered users.
    ///
    /// No unique constraint covers the name pair; uniqueness is checked
    /// before insert.
    users (id) {
        /// Primary key, assigned by `gen_random_uuid()`.
        id -> Uuid,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Varchar,
        age -> Int8,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
