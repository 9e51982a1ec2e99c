//! User API handlers.
//!
//! ```text
//! POST /user/save {"firstName":"John","lastName":"Johnson","email":"j@j.com","age":30}
//! GET /user/find/{userId}
//! ```

use actix_web::error::JsonPayloadError;
use actix_web::{HttpResponse, Scope, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::ports::CreateUserOutcome;
use crate::domain::{Error, NewUser, User, ValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Body returned when a lookup finds nothing.
pub const USER_NOT_FOUND_MESSAGE: &str = "user not found";

/// Create request body for `POST /user/save`.
///
/// Missing and `null` fields take their zero value and unknown fields are
/// ignored, so an incomplete body reaches validation instead of failing to
/// decode.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Given name.
    #[schema(example = "John")]
    pub first_name: Option<String>,
    /// Family name.
    #[schema(example = "Johnson")]
    pub last_name: Option<String>,
    /// Contact email address.
    #[schema(example = "j@j.com")]
    pub email: Option<String>,
    /// Age in whole years.
    #[schema(example = 30)]
    pub age: Option<i64>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            first_name: value.first_name.unwrap_or_default(),
            last_name: value.last_name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            age: value.age.unwrap_or_default(),
        }
    }
}

fn decode_detail(err: &JsonPayloadError) -> String {
    match err {
        JsonPayloadError::Deserialize(inner) => inner.to_string(),
        other => other.to_string(),
    }
}

/// JSON extractor settings for the user scope.
///
/// A body that cannot be decoded is reported as a validation failure with a
/// single detail holding the decoder message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            error!(error = %err, "failed to decode user payload");
            Error::from(ValidationError::from_detail(decode_detail(&err))).into()
        })
}

/// Routes under `/user`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::users;
///
/// let app = App::new().service(users::scope());
/// ```
pub fn scope() -> Scope {
    web::scope("/user")
        .app_data(json_config())
        .service(save_user)
        .service(find_user)
}

/// Validate and persist a new user.
#[utoipa::path(
    post,
    path = "/user/save",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "User did not pass validation", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "saveUser"
)]
#[post("/save")]
pub async fn save_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let candidate = NewUser::from(payload.into_inner());
    match state.create_user.create_user(candidate).await {
        Ok(CreateUserOutcome::Created(user)) => Ok(HttpResponse::Created().json(user)),
        Ok(CreateUserOutcome::Rejected(rejection)) => {
            error!(details = ?rejection.details(), "user did not pass validation");
            Err(Error::from(rejection))
        }
        Err(err) => {
            error!(error = %err, "failed to save user");
            Err(err)
        }
    }
}

/// Fetch a user by identifier.
///
/// Malformed identifiers are answered like unknown ones.
#[utoipa::path(
    get,
    path = "/user/find/{userId}",
    params(("userId" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "findUser"
)]
#[get("/find/{userId}")]
pub async fn find_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let raw_id = path.into_inner();
    match state.find_user.find_user(&raw_id).await {
        Ok(Some(user)) => Ok(web::Json(user)),
        Ok(None) => {
            error!(user_id = %raw_id, "user not found");
            Err(Error::not_found(USER_NOT_FOUND_MESSAGE))
        }
        Err(err) => {
            error!(user_id = %raw_id, error = %err, "failed to find user");
            Err(err)
        }
    }
}
