//! Repository contract consumed by the resource services
//!
//! The SDK does not talk HTTP itself. A [`Repository`] implementation owns the
//! transport, authentication, retries and pagination, and services only hand
//! it a [`ResourceDescriptor`] describing the target and the body to send.

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// Target and body of a single request issued through a [`Repository`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Fully qualified resource URL
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// JSON-encoded request body, set on writes only
    pub payload: Option<Vec<u8>>,
}

impl ResourceDescriptor {
    /// Create a JSON descriptor for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            payload: None,
        }
        .with_header("Content-Type", "application/json")
    }

    /// Add a header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Serialize `payload` as the request body
    pub fn with_payload<T: Serialize>(mut self, payload: &T) -> Result<Self> {
        self.payload = Some(serde_json::to_vec(payload)?);
        Ok(self)
    }

    /// Decode the request body, if any
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        self.payload
            .as_deref()
            .map(|bytes| serde_json::from_slice::<T>(bytes))
            .transpose()
            .map_err(Error::from)
    }
}

/// Executes requests against the remote API
#[async_trait]
pub trait Repository: Send + Sync {
    /// Fetch a resource; each block is one page or batch of serialized entities
    async fn read(&self, descriptor: &ResourceDescriptor) -> Result<Vec<Vec<u8>>>;

    /// Create a resource and return the response body
    async fn create(&self, descriptor: &ResourceDescriptor) -> Result<Vec<u8>>;

    /// Update a resource and return the response body
    async fn update(&self, descriptor: &ResourceDescriptor) -> Result<Vec<u8>>;

    /// Delete a resource and return the response body
    async fn destroy(&self, descriptor: &ResourceDescriptor) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Body {
        name: String,
    }

    #[test]
    fn test_new_sets_json_content_type() {
        let descriptor = ResourceDescriptor::new("https://test.com/things");

        assert_eq!(descriptor.url, "https://test.com/things");
        assert_eq!(
            descriptor.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(descriptor.payload.is_none());
    }

    #[test]
    fn test_payload_round_trip() {
        let body = Body { name: "name".to_string() };
        let descriptor = ResourceDescriptor::new("https://test.com")
            .with_payload(&body)
            .unwrap();

        assert_eq!(descriptor.payload.as_deref(), Some(&br#"{"name":"name"}"#[..]));
        assert_eq!(descriptor.payload_as::<Body>().unwrap(), Some(body));
    }

    #[test]
    fn test_payload_as_without_body() {
        let descriptor = ResourceDescriptor::new("https://test.com");
        assert_eq!(descriptor.payload_as::<Body>().unwrap(), None);
    }

    #[test]
    fn test_payload_as_malformed_body() {
        let mut descriptor = ResourceDescriptor::new("https://test.com");
        descriptor.payload = Some(b"not json".to_vec());

        assert!(matches!(descriptor.payload_as::<Body>(), Err(Error::Json(_))));
    }
}
