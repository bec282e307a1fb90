//! Resource services of the OneLogin API

pub mod auth_servers;
