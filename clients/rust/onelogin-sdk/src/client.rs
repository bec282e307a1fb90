//! High-level OneLogin client

use crate::config::Config;
use crate::error::Result;
use crate::repository::Repository;
use crate::services::auth_servers::client_apps::ClientAppsService;
use std::sync::Arc;

/// OneLogin API client
///
/// Binds a validated [`Config`] to a [`Repository`] and hands out the
/// per-resource services.
#[derive(Clone)]
pub struct Client {
    config: Arc<Config>,
    base_url: String,
    repository: Arc<dyn Repository>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: Config, repository: Arc<dyn Repository>) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url();
        tracing::debug!(%base_url, "OneLogin client configured");

        Ok(Self {
            config: Arc::new(config),
            base_url,
            repository,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client applications of authorization servers
    pub fn client_apps(&self) -> ClientAppsService {
        ClientAppsService::new(Arc::clone(&self.repository), &self.base_url)
    }
}
