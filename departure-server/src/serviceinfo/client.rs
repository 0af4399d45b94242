//! Service-info HTTP client.
//!
//! Fetches per-stop platform and timing data for one train run. A lookup is
//! a single GET with a short timeout; callers treat every failure as "no
//! data", so nothing here retries.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::ServiceInfoError;
use super::types::{Service, ServiceInfoResponse};

/// Client-side timeout for a lookup. Feed requests wait on it, so it stays short.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Configuration for the service-info lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceInfoConfig {
    /// Lookups are skipped entirely when false
    #[serde(default)]
    pub enabled: bool,

    /// Base URL including the trailing slash (e.g. "http://serviceinfo:8080/")
    pub url: String,
}

impl ServiceInfoConfig {
    /// Create an enabled config for the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            enabled: true,
            url: url.into(),
        }
    }

    /// Set whether lookups are performed.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Service-info API client.
///
/// Built from an optional config: without one, or with `enabled: false`,
/// every lookup reports "no data" without touching the network.
#[derive(Debug, Clone)]
pub struct ServiceInfoClient {
    http: reqwest::Client,
    config: Option<ServiceInfoConfig>,
}

impl ServiceInfoClient {
    /// Create a new client.
    pub fn new(config: Option<ServiceInfoConfig>) -> Result<Self, ServiceInfoError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, config })
    }

    /// Whether lookups go out to the network.
    pub fn is_enabled(&self) -> bool {
        self.config.as_ref().is_some_and(|c| c.enabled)
    }

    /// URL of the lookup for one train run, or `None` when disabled.
    pub fn service_url(&self, train_number: &str, service_date: NaiveDate) -> Option<String> {
        let config = self.config.as_ref().filter(|c| c.enabled)?;
        Some(format!(
            "{}service/{}/{}",
            config.url,
            service_date.format("%Y-%m-%d"),
            train_number
        ))
    }

    /// Fetch the services for one train run.
    ///
    /// Returns `Ok(None)` when disabled or when the response carries no
    /// `services` field.
    pub async fn fetch(
        &self,
        train_number: &str,
        service_date: NaiveDate,
    ) -> Result<Option<Vec<Service>>, ServiceInfoError> {
        let Some(url) = self.service_url(train_number, service_date) else {
            return Ok(None);
        };

        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceInfoError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;

        let parsed: ServiceInfoResponse =
            serde_json::from_str(&body).map_err(|e| ServiceInfoError::Json {
                message: e.to_string(),
                body_len: body.len(),
            })?;

        Ok(parsed.services)
    }
}
