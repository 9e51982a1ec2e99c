//! HTTP server configuration object.

use std::time::Duration;

use user_service::config::AppSettings;

/// Listener and drain settings for [`super::create_server`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) shutdown_grace: Duration,
}

impl ServerConfig {
    /// Build a configuration from explicit values.
    pub fn new(bind_addr: (String, u16), shutdown_grace: Duration) -> Self {
        Self {
            bind_addr,
            shutdown_grace,
        }
    }

    /// Build a configuration from loaded settings.
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            (settings.host().to_owned(), settings.port()),
            settings.shutdown_grace(),
        )
    }

    /// Grace period given to in-flight requests on shutdown.
    pub fn shutdown_grace(&self) -> Duration {
        self.shutdown_grace
    }
}
