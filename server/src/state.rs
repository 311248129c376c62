//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the activity API and that API's base
//! URL. The host keeps no activity data of its own.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Activity API base URL, no trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build the upstream client from host configuration.
    ///
    /// # Errors
    ///
    /// Returns the reqwest builder error if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self { http, upstream: Arc::from(config.activities_api_url.as_str()) })
    }
}
