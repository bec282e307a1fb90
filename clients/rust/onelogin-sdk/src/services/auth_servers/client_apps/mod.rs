//! Client applications of an authorization server
//!
//! Lists, creates, updates and deletes the OAuth clients attached to an
//! authorization server under `/api/2/api_authorizations/{id}/clients`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use onelogin_sdk::repository::Repository;
//! use onelogin_sdk::services::auth_servers::client_apps::{ClientApp, ClientAppsService};
//! use std::sync::Arc;
//!
//! # async fn example(repository: Arc<dyn Repository>) -> onelogin_sdk::Result<()> {
//! let service = ClientAppsService::new(repository, "https://api.us.onelogin.com");
//!
//! let mut app = ClientApp::new(1234, 56).with_scope_ids([1, 2]);
//! service.create(&mut app).await?;
//! println!("Created client app {:?}", app.app_id);
//! # Ok(())
//! # }
//! ```

mod model;

pub use model::{ClientApp, ClientAppsQuery};

use self::model::{ClientAppWrite, WriteResponse};
use super::API_AUTHORIZATIONS_PATH;
use crate::error::{Error, Result};
use crate::repository::{Repository, ResourceDescriptor};
use std::sync::Arc;
use tracing::{debug, warn};

/// Service for the client applications of authorization servers
#[derive(Clone)]
pub struct ClientAppsService {
    repository: Arc<dyn Repository>,
    endpoint: String,
}

impl std::fmt::Debug for ClientAppsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientAppsService")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ClientAppsService {
    /// Create a service issuing requests against `base_url`
    pub fn new(repository: Arc<dyn Repository>, base_url: impl AsRef<str>) -> Self {
        Self {
            repository,
            endpoint: format!(
                "{}{}",
                base_url.as_ref().trim_end_matches('/'),
                API_AUTHORIZATIONS_PATH
            ),
        }
    }

    fn collection_url(&self, auth_server_id: impl std::fmt::Display) -> String {
        format!("{}/{}/clients", self.endpoint, auth_server_id)
    }

    fn member_url(&self, auth_server_id: i32, client_id: i32) -> String {
        format!("{}/{}", self.collection_url(auth_server_id), client_id)
    }

    /// List the client applications of an authorization server
    ///
    /// All blocks returned by the repository are decoded before anything is
    /// returned; one malformed block fails the whole call.
    pub async fn query(&self, query: &ClientAppsQuery) -> Result<Vec<ClientApp>> {
        let descriptor = ResourceDescriptor::new(self.collection_url(&query.auth_server_id));
        debug!(url = %descriptor.url, auth_server_id = %query.auth_server_id, "Querying client apps");

        let blocks = self.repository.read(&descriptor).await?;

        let mut apps = Vec::new();
        for block in &blocks {
            let page: Vec<ClientApp> = serde_json::from_slice(block).map_err(|e| {
                warn!(url = %descriptor.url, error = %e, "Failed to decode client apps");
                Error::from(e)
            })?;
            apps.extend(page);
        }

        debug!(count = apps.len(), "Queried client apps");
        Ok(apps)
    }

    /// Create a client application and attach its scopes
    ///
    /// Identifiers returned by the server are written back into `payload`.
    pub async fn create(&self, payload: &mut ClientApp) -> Result<()> {
        let (auth_server_id, app_id) = payload.identifiers().ok_or(Error::MissingIdentifiers)?;

        let descriptor = ResourceDescriptor::new(self.collection_url(auth_server_id))
            .with_payload(&ClientAppWrite::from(&*payload))?;
        debug!(url = %descriptor.url, auth_server_id, app_id, "Creating client app");

        let response = self.repository.create(&descriptor).await?;
        self.apply_response(payload, &response)
    }

    /// Update a client application's name and scopes
    ///
    /// Identifiers returned by the server are written back into `payload`.
    pub async fn update(&self, payload: &mut ClientApp) -> Result<()> {
        let (auth_server_id, app_id) = payload.identifiers().ok_or(Error::MissingIdentifiers)?;

        let descriptor = ResourceDescriptor::new(self.member_url(auth_server_id, app_id))
            .with_payload(&ClientAppWrite::from(&*payload))?;
        debug!(url = %descriptor.url, auth_server_id, app_id, "Updating client app");

        let response = self.repository.update(&descriptor).await?;
        self.apply_response(payload, &response)
    }

    /// Delete a client application from an authorization server
    pub async fn destroy(&self, auth_server_id: i32, client_id: i32) -> Result<()> {
        let descriptor = ResourceDescriptor::new(self.member_url(auth_server_id, client_id));
        debug!(url = %descriptor.url, auth_server_id, client_id, "Deleting client app");

        self.repository.destroy(&descriptor).await?;
        Ok(())
    }

    fn apply_response(&self, payload: &mut ClientApp, response: &[u8]) -> Result<()> {
        let returned: WriteResponse = serde_json::from_slice(response).map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "Failed to decode client app response");
            Error::from(e)
        })?;
        payload.merge_identifiers(returned);
        Ok(())
    }
}
