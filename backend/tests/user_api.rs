//! End-to-end HTTP tests over the real services and an in-memory store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, Error, test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use user_service::Trace;
use user_service::domain::ports::InMemoryUserRepository;
use user_service::domain::{CreateUserService, FindUserService};
use user_service::inbound::http::state::HttpState;
use user_service::inbound::http::users;

#[fixture]
fn repository() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::new())
}

async fn app(
    repository: Arc<InMemoryUserRepository>,
) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    let state = HttpState::new(
        Arc::new(CreateUserService::new(Arc::clone(&repository))),
        Arc::new(FindUserService::new(repository)),
    );
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(users::scope()),
    )
    .await
}

fn john() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Johnson",
        "email": "j@j.com",
        "age": 30,
    })
}

async fn send(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    request: test::TestRequest,
) -> (StatusCode, Value) {
    let response = test::call_service(app, request.to_request()).await;
    assert!(
        response.headers().contains_key("trace-id"),
        "every response carries a trace id"
    );
    let status = response.status();
    let body = test::read_body(response).await;
    (status, serde_json::from_slice(&body).expect("JSON body"))
}

fn save(body: Value) -> test::TestRequest {
    test::TestRequest::post().uri("/user/save").set_json(body)
}

fn find(id: &str) -> test::TestRequest {
    test::TestRequest::get().uri(&format!("/user/find/{id}"))
}

#[rstest]
#[actix_web::test]
async fn valid_user_is_created(repository: Arc<InMemoryUserRepository>) {
    let app = app(Arc::clone(&repository)).await;

    let (status, body) = send(&app, save(john())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["lastName"], "Johnson");
    assert_eq!(body["email"], "j@j.com");
    assert_eq!(body["age"], 30);
    assert_eq!(repository.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn created_user_can_be_found_repeatedly(repository: Arc<InMemoryUserRepository>) {
    let app = app(repository).await;
    let (_, created) = send(&app, save(john())).await;
    let id = created["id"].as_str().expect("id").to_owned();

    let (first_status, first) = send(&app, find(&id)).await;
    let (second_status, second) = send(&app, find(&id)).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, created);
    assert_eq!(second, first);
}

#[rstest]
#[actix_web::test]
async fn empty_email_is_rejected(repository: Arc<InMemoryUserRepository>) {
    let app = app(Arc::clone(&repository)).await;
    let mut body = john();
    body["email"] = json!("");

    let (status, body) = send(&app, save(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "error": "User did not pass validation",
            "details": ["user email required"],
        })
    );
    assert!(repository.is_empty());
}

#[rstest]
#[actix_web::test]
async fn several_failures_are_reported_in_order(repository: Arc<InMemoryUserRepository>) {
    let app = app(repository).await;

    let (status, body) = send(
        &app,
        save(json!({ "email": "J@J.COM", "age": 17 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"],
        json!([
            "user does not meet minimum age requirement",
            "user email must be properly formatted",
            "user first/last names required",
        ])
    );
}

#[rstest]
#[actix_web::test]
async fn null_email_is_reported_as_missing(repository: Arc<InMemoryUserRepository>) {
    let app = app(Arc::clone(&repository)).await;
    let mut body = john();
    body["email"] = Value::Null;

    let (status, body) = send(&app, save(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], json!(["user email required"]));
    assert!(repository.is_empty());
}

#[rstest]
#[actix_web::test]
async fn large_ages_round_trip(repository: Arc<InMemoryUserRepository>) {
    let app = app(repository).await;
    let mut body = john();
    body["age"] = json!(3_000_000_000_i64);

    let (status, created) = send(&app, save(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id").to_owned();

    let (_, found) = send(&app, find(&id)).await;
    assert_eq!(found["age"], 3_000_000_000_i64);
}

#[rstest]
#[actix_web::test]
async fn duplicate_name_pair_is_rejected(repository: Arc<InMemoryUserRepository>) {
    let app = app(Arc::clone(&repository)).await;
    let (first, _) = send(&app, save(john())).await;
    assert_eq!(first, StatusCode::CREATED);

    let mut again = john();
    again["email"] = json!("other@j.com");
    let (status, body) = send(&app, save(again)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"],
        json!(["user with the same first and last name already exists"])
    );
    assert_eq!(repository.len(), 1);
}

#[rstest]
#[case::short("a")]
#[case::not_a_uuid("not-a-uuid")]
#[case::unknown("3fa85f64-5717-4562-b3fc-2c963f66afa6")]
#[actix_web::test]
async fn unknown_or_malformed_ids_are_not_found(
    repository: Arc<InMemoryUserRepository>,
    #[case] id: &str,
) {
    let app = app(repository).await;

    let (status, body) = send(&app, find(id)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "user not found" }));
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_a_single_detail_400(repository: Arc<InMemoryUserRepository>) {
    let app = app(Arc::clone(&repository)).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/user/save")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"firstName": "John", "age": }"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User did not pass validation");
    assert_eq!(body["details"].as_array().map(Vec::len), Some(1));
    assert!(repository.is_empty());
}
