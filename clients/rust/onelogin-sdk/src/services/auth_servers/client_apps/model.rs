//! Client application DTOs

use crate::services::auth_servers::scopes::Scope;
use serde::{Deserialize, Serialize};

/// Selects the authorization server whose client applications are listed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientAppsQuery {
    pub auth_server_id: String,
}

impl ClientAppsQuery {
    pub fn new(auth_server_id: impl Into<String>) -> Self {
        Self {
            auth_server_id: auth_server_id.into(),
        }
    }
}

/// A client application attached to an authorization server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientApp {
    /// Client application id, also the id of the parent OAuth app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<i32>,
    /// Owning authorization server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_auth_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Granted scopes, populated on reads
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<Scope>,
    /// Scope ids to grant, supplied on writes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope_ids: Vec<i32>,
}

impl ClientApp {
    /// Create a write payload addressing `app_id` under `api_auth_id`
    pub fn new(app_id: i32, api_auth_id: i32) -> Self {
        Self {
            app_id: Some(app_id),
            api_auth_id: Some(api_auth_id),
            ..Self::default()
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the scope ids to grant
    pub fn with_scope_ids(mut self, scope_ids: impl IntoIterator<Item = i32>) -> Self {
        self.scope_ids = scope_ids.into_iter().collect();
        self
    }

    /// `(api_auth_id, app_id)` when both are present
    pub(crate) fn identifiers(&self) -> Option<(i32, i32)> {
        Some((self.api_auth_id?, self.app_id?))
    }

    /// Overwrite identifiers with the ones the server returned
    pub(crate) fn merge_identifiers(&mut self, response: WriteResponse) {
        if let Some(app_id) = response.app_id {
            self.app_id = Some(app_id);
        }
        if let Some(api_auth_id) = response.api_auth_id {
            self.api_auth_id = Some(api_auth_id);
        }
    }
}

/// Body sent on create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ClientAppWrite {
    #[serde(rename = "app_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_auth_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<i32>,
}

impl From<&ClientApp> for ClientAppWrite {
    fn from(app: &ClientApp) -> Self {
        Self {
            id: app.app_id,
            api_auth_id: app.api_auth_id,
            name: app.name.clone(),
            scopes: app.scope_ids.clone(),
        }
    }
}

impl From<ClientAppWrite> for ClientApp {
    fn from(write: ClientAppWrite) -> Self {
        Self {
            app_id: write.id,
            api_auth_id: write.api_auth_id,
            name: write.name,
            scopes: Vec::new(),
            scope_ids: write.scopes,
        }
    }
}

/// Identifiers echoed back by create and update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct WriteResponse {
    #[serde(default)]
    pub app_id: Option<i32>,
    #[serde(default)]
    pub api_auth_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_projection_wire_shape() {
        let app = ClientApp::new(1, 2).with_name("name").with_scope_ids([3, 4]);
        let write = ClientAppWrite::from(&app);

        assert_eq!(
            serde_json::to_value(&write).unwrap(),
            json!({"app_id": 1, "api_auth_id": 2, "name": "name", "scopes": [3, 4]})
        );
    }

    #[test]
    fn test_write_projection_omits_absent_fields() {
        let write = ClientAppWrite::from(&ClientApp::new(1, 2));

        assert_eq!(
            serde_json::to_value(&write).unwrap(),
            json!({"app_id": 1, "api_auth_id": 2})
        );
    }

    #[test]
    fn test_write_projection_round_trip() {
        let app = ClientApp::new(7, 9).with_name("portal").with_scope_ids([5, 1, 3]);

        let bytes = serde_json::to_vec(&ClientAppWrite::from(&app)).unwrap();
        let decoded: ClientAppWrite = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(ClientApp::from(decoded), app);
    }

    #[test]
    fn test_read_shape_deserializes_scopes() {
        let app: ClientApp = serde_json::from_value(json!({
            "app_id": 1,
            "api_auth_id": 2,
            "name": "name",
            "scopes": [
                {"id": 1, "auth_server_id": 2, "value": "read", "description": "Read access"}
            ]
        }))
        .unwrap();

        assert_eq!(app.app_id, Some(1));
        assert_eq!(app.scopes.len(), 1);
        assert_eq!(app.scopes[0].value.as_deref(), Some("read"));
        assert!(app.scope_ids.is_empty());
    }

    #[test]
    fn test_identifiers_require_both_ids() {
        assert_eq!(ClientApp::new(1, 2).identifiers(), Some((2, 1)));

        let no_auth = ClientApp { app_id: Some(1), ..ClientApp::default() };
        assert_eq!(no_auth.identifiers(), None);

        let no_app = ClientApp { api_auth_id: Some(2), ..ClientApp::default() };
        assert_eq!(no_app.identifiers(), None);
    }

    #[test]
    fn test_merge_identifiers_keeps_other_fields() {
        let mut app = ClientApp::new(1, 1).with_name("name").with_scope_ids([1, 2]);
        app.merge_identifiers(WriteResponse { app_id: Some(10), api_auth_id: None });

        assert_eq!(app.app_id, Some(10));
        assert_eq!(app.api_auth_id, Some(1));
        assert_eq!(app.name.as_deref(), Some("name"));
        assert_eq!(app.scope_ids, vec![1, 2]);
    }
}
