//! Signal handling and graceful drain.
//!
//! On SIGINT or SIGTERM liveness flips to unhealthy, the listener stops
//! accepting connections and in-flight requests get the configured grace
//! period. Overrunning the grace period is reported as an error so the
//! process exits non-zero.

use std::future::Future;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::web;
use thiserror::Error;
use tracing::{info, warn};
use user_service::inbound::http::health::HealthState;

/// Failures while serving or stopping.
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// Installing a signal handler failed.
    #[error("failed to listen for shutdown signals: {0}")]
    Signal(#[source] std::io::Error),
    /// In-flight requests did not finish in time.
    #[error("graceful shutdown exceeded {grace:?}")]
    GraceExceeded { grace: Duration },
    /// The server stopped with an I/O error.
    #[error("server failed: {0}")]
    Server(#[source] std::io::Error),
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn wait_for_termination() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.map(|()| "SIGINT"),
            _ = sigterm.recv() => Ok("SIGTERM"),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.map(|()| "ctrl-c")
    }
}

/// Run `stop` to completion within `grace`.
async fn drain<F>(stop: F, grace: Duration) -> Result<(), ShutdownError>
where
    F: Future<Output = ()>,
{
    tokio::time::timeout(grace, stop)
        .await
        .map_err(|_| ShutdownError::GraceExceeded { grace })
}

/// Drive `server` until a termination signal arrives, then drain it.
///
/// If the server exits on its own first, its result is returned directly.
///
/// # Errors
/// Returns [`ShutdownError`] when signals cannot be installed, the server
/// fails, or the drain overruns `grace`.
pub async fn serve_until_signal(
    server: Server,
    health_state: web::Data<HealthState>,
    grace: Duration,
) -> Result<(), ShutdownError> {
    let handle = server.handle();
    let mut running = actix_web::rt::spawn(server);
    health_state.mark_ready();
    info!("server ready");

    tokio::select! {
        signal = wait_for_termination() => {
            let signal = signal.map_err(ShutdownError::Signal)?;
            info!(signal, grace_secs = grace.as_secs(), "shutdown signal received; draining");
        }
        finished = &mut running => {
            warn!("server stopped without a shutdown signal");
            return match finished {
                Ok(result) => result.map_err(ShutdownError::Server),
                Err(join) => Err(ShutdownError::Server(std::io::Error::other(join.to_string()))),
            };
        }
    }

    health_state.mark_unhealthy();
    drain(handle.stop(true), grace).await?;
    info!("shutdown complete");
    Ok(())
}
