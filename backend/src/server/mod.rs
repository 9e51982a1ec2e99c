//! Server construction and middleware wiring.

mod config;
mod shutdown;

pub use config::ServerConfig;
pub use shutdown::serve_until_signal;

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use user_service::Trace;
#[cfg(debug_assertions)]
use user_service::doc::ApiDoc;
use user_service::domain::ports::UserRepository;
use user_service::domain::{CreateUserService, FindUserService};
use user_service::inbound::http::health::{HealthState, live, ready};
use user_service::inbound::http::state::HttpState;
use user_service::inbound::http::users;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Extra time Actix workers get beyond the drain deadline.
const ACTIX_SHUTDOWN_SLACK: Duration = Duration::from_secs(1);

/// Wire the create and find services over a single repository.
pub fn build_http_state<R>(repository: Arc<R>) -> HttpState
where
    R: UserRepository + 'static,
{
    HttpState::new(
        Arc::new(CreateUserService::new(Arc::clone(&repository))),
        Arc::new(FindUserService::new(repository)),
    )
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(users::scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the HTTP server.
///
/// Actix signal handling is disabled; [`serve_until_signal`] owns shutdown.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(http_state);
    let server = HttpServer::new(move || build_app(health_state.clone(), http_state.clone()))
        .disable_signals()
        .shutdown_timeout((config.shutdown_grace + ACTIX_SHUTDOWN_SLACK).as_secs())
        .bind(config.bind_addr.clone())?
        .run();
    Ok(server)
}
