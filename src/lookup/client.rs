//! HTTP client for the employee name endpoint
//!
//! Thin `reqwest` wrapper around `GET <base>/get_employee_name/{identifier}`.
//! The endpoint answers a hit with the plain-text display name; any
//! non-success status is a miss. Status codes are not surfaced further.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::LookupChannel;

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct EmployeeNameClient {
    client: Client,
    base_url: Url,
}

impl EmployeeNameClient {
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Convenience constructor validating the base URL string.
    pub fn for_base(base: &str) -> Result<Self> {
        let base_url = Url::parse(base).with_context(|| format!("Invalid base URL: {base}"))?;
        Self::new(base_url)
    }

    /// Fetch the display name for an identifier.
    ///
    /// The identifier goes into the path unmodified; the portal never
    /// validates it client-side.
    pub async fn fetch_name(&self, identifier: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/get_employee_name/{}",
            self.base_url.as_str().trim_end_matches('/'),
            identifier
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach employee name endpoint")?;

        if !response.status().is_success() {
            debug!(
                identifier = %identifier,
                status = %response.status(),
                "employee name lookup missed"
            );
            return Ok(None);
        }

        let name = response
            .text()
            .await
            .context("Failed to read employee name response")?;

        Ok(Some(name))
    }
}

#[async_trait]
impl LookupChannel for EmployeeNameClient {
    async fn fetch_name(&self, identifier: &str) -> Result<Option<String>> {
        EmployeeNameClient::fetch_name(self, identifier).await
    }
}
