//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers the user and health endpoints together with the
//! schema wrappers from `inbound::http::schemas`. Debug builds serve it via
//! Swagger UI at `/docs`.

use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::users::CreateUserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "Create users with validation and look them up by identifier."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::save_user,
        crate::inbound::http::users::find_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorSchema, CreateUserRequest)),
    tags(
        (name = "users", description = "Create and find users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
