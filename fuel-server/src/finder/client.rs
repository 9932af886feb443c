//! Fuel finder HTTP client.
//!
//! Posts the search form to the RACQ fuel finder and returns the raw
//! results page. One request per lookup; no retries.

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::Postcode;

use super::error::FinderError;
use super::source::PageSource;

/// Default fuel finder results endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://www.racq.com.au/AjaxPages/FuelFinderResultsPage.aspx";

/// Fuel type sent with every query.
pub const FUEL_TYPE: &str = "Unleaded";

/// Configuration for the fuel finder client.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Results page URL (defaults to the RACQ endpoint)
    pub endpoint: String,
    /// Request timeout in seconds; `None` keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl FinderConfig {
    /// Create a config pointing at the production fuel finder.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom endpoint (for testing).
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fuel finder client.
#[derive(Debug, Clone)]
pub struct FinderClient {
    http: reqwest::Client,
    endpoint: String,
}

impl FinderClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FinderConfig) -> Result<Self, FinderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint,
        })
    }

    /// The URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PageSource for FinderClient {
    async fn fetch_results(&self, postcode: &Postcode) -> Result<String, FinderError> {
        debug!(%postcode, endpoint = %self.endpoint, "querying fuel finder");

        let response = self
            .http
            .post(&self.endpoint)
            .form(&[("location", postcode.as_str()), ("fuel-type", FUEL_TYPE)])
            .send()
            .await?;

        let status = response.status();

        // Anything but 200 is a failure, including other 2xx codes.
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(%postcode, status = status.as_u16(), "fuel finder returned an error status");
            return Err(FinderError::Status {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        Ok(response.text().await?)
    }
}
