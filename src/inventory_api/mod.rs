//! Inventory service client.
//!
//! Thin async wrapper over the shop's REST inventory service. Every call maps
//! one-to-one onto an HTTP request; there is no retry or caching here, the
//! caller re-fetches the list after each mutation.

mod client;
mod items;

use std::time::Duration;

use log::{debug, info};
use reqwest::Client;

use crate::error::Result;

/// Base URL of the hosted inventory service.
pub const DEFAULT_API_URL: &str = "https://inventory-app-1-9frl.onrender.com";

/// HTTP client for the inventory service.
pub struct InventoryApi {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl InventoryApi {
    /// Creates a client with reqwest's default settings (no request timeout).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = normalize_base_url(base_url.into());
        info!("Creating inventory API client for {base_url}");
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Creates a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into());
        info!("Creating inventory API client for {base_url}");
        debug!("Request timeout: {timeout:?}");
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

pub(crate) fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
