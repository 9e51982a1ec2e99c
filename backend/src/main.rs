//! User service entry point: loads settings, migrates the database, serves
//! the REST API and drains on SIGINT or SIGTERM.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_http_state, create_server, serve_until_signal};
use user_service::config::{AppSettings, LogFormat};
use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, run_pending_migrations,
};

fn init_tracing(settings: &AppSettings) {
    let (level, invalid_level) = match settings.log_level() {
        Ok(level) => (level, None),
        Err(err) => (LevelFilter::INFO, Some(err)),
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let result = match settings.log_format() {
        LogFormat::Json => fmt().with_env_filter(filter).json().try_init(),
        LogFormat::Text => fmt().with_env_filter(filter).try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
    if let Some(err) = invalid_level {
        warn!(error = %err, "falling back to info log level");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let dotenv = dotenvy::dotenv();

    let settings = AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    init_tracing(&settings);
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "failed to read environment file"),
    }

    let database = settings.database()?;
    info!(
        environment = settings.environment().unwrap_or("unset"),
        db_host = %database.host,
        db_port = database.port,
        db_name = %database.name,
        "starting user service"
    );
    let database_url = database.connection_url()?;

    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .wrap_err("migration task panicked")??;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.db_pool_size()))
        .await?;
    pool.ping().await?;
    info!("database reachable");

    let http_state = build_http_state(Arc::new(DieselUserRepository::new(pool)));
    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::from_settings(&settings);
    let server = create_server(health_state.clone(), http_state, &config)
        .wrap_err_with(|| format!("failed to bind {}:{}", settings.host(), settings.port()))?;
    info!(host = settings.host(), port = settings.port(), "listening");

    serve_until_signal(server, health_state, config.shutdown_grace()).await?;
    Ok(())
}
