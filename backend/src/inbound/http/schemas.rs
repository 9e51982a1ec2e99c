//! OpenAPI schema wrappers for domain types.
//!
//! Domain types do not derive `ToSchema`; these mirrors register their wire
//! shape with utoipa from the adapter layer.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
#[schema(rename_all = "camelCase")]
pub struct UserSchema {
    /// Database-assigned identifier.
    #[schema(format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "John")]
    first_name: String,
    #[schema(example = "Johnson")]
    last_name: String,
    #[schema(example = "j@j.com")]
    email: String,
    /// Age in whole years; at least 18.
    #[schema(example = 30)]
    age: i64,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// `details` is present on validation failures only.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Summary message.
    #[schema(example = "User did not pass validation")]
    error: String,
    /// Ordered failure details.
    #[schema(example = json!(["user email required"]))]
    details: Option<Vec<String>>,
}
