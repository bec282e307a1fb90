//! # OneLogin SDK for Rust
//!
//! Typed services over the OneLogin API v2. The SDK maps domain objects to
//! request descriptors and decodes responses; the HTTP exchange itself is done
//! by a caller-supplied [`Repository`](repository::Repository).
//!
//! ## Features
//!
//! - **Client Apps**: list, create, update and delete the client applications
//!   of an authorization server
//! - **Repository Contract**: plug in any transport, authentication and retry policy
//! - **Testing**: a closure-driven, call-counting [`MockRepository`](testing::MockRepository)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use onelogin_sdk::services::auth_servers::client_apps::ClientAppsQuery;
//! use onelogin_sdk::{repository::Repository, Client, Config};
//! use std::sync::Arc;
//!
//! # async fn example(repository: Arc<dyn Repository>) -> onelogin_sdk::Result<()> {
//! let client = Client::new(Config::from_env(), repository)?;
//!
//! let apps = client.client_apps().query(&ClientAppsQuery::new("42")).await?;
//! println!("Found {} client apps", apps.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod repository;
pub mod services;
pub mod testing;

// Re-export main types
pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
