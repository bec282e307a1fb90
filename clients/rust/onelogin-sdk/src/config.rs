//! SDK Configuration

use crate::error::{Error, Result};
use std::env;

/// Regions served by the hosted API
const SUPPORTED_REGIONS: &[&str] = &["us", "eu"];

/// Configuration for the OneLogin SDK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API region (`us` or `eu`)
    pub region: String,

    /// Explicit API URL, takes precedence over the region
    pub url: Option<String>,
}

impl Config {
    /// Create a new configuration for the given region
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            url: None,
        }
    }

    /// Load configuration from `ONELOGIN_REGION` and `ONELOGIN_URL`
    pub fn from_env() -> Self {
        let region = env::var("ONELOGIN_REGION").unwrap_or_else(|_| "us".to_string());
        let url = env::var("ONELOGIN_URL").ok().filter(|url| !url.is_empty());

        Self { region, url }
    }

    /// Set an explicit API URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Base URL every resource path is appended to
    pub fn base_url(&self) -> String {
        match &self.url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://api.{}.onelogin.com", self.region),
        }
    }

    /// Check that the configuration can produce a usable base URL
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::Config(format!("url must be http(s), got {:?}", url)));
            }
            return Ok(());
        }

        if !SUPPORTED_REGIONS.contains(&self.region.as_str()) {
            return Err(Error::Config(format!(
                "unsupported region {:?}, expected one of {:?}",
                self.region, SUPPORTED_REGIONS
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("us")
    }
}
