//! Authorization servers (`/api/2/api_authorizations`) and their sub-resources

pub mod client_apps;
pub mod scopes;

/// Path of the authorization servers collection, relative to the base URL
pub(crate) const API_AUTHORIZATIONS_PATH: &str = "/api/2/api_authorizations";
