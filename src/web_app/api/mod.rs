// web_app/api/mod.rs - Server-side access to the inventory HTTP API
//
// This module contains the outbound HTTP client and its configuration.
// It is only compiled for the server; the browser reaches the API through
// server functions.

pub mod client;
pub mod config;

pub use client::{get_client, init_client, set_test_client, ApiClient};
pub use config::ApiConfig;
