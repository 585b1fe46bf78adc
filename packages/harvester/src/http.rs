//! HTTP transport for the Adlib query endpoint.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{HarvestError, Result};

/// User agent string identifying this harvester.
const USER_AGENT: &str = concat!("podium-harvester/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// One paginated request against the upstream archive.
///
/// The fetcher is written against this trait so tests can substitute a
/// fixture-backed transport and run without network or delays.
pub trait PageTransport {
    /// Fetch the raw XML body for one page of results.
    ///
    /// `filter` is the Adlib search expression, `limit` the page size and
    /// `offset` the zero-based record offset. Any transport or status
    /// failure is fatal to the run; there is no retry here.
    fn fetch_page(&self, filter: &str, limit: u32, offset: u32) -> Result<String>;
}

/// [`PageTransport`] backed by a blocking reqwest client.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the given endpoint base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: create_client()?,
            base_url: base_url.into(),
        })
    }
}

impl PageTransport for HttpTransport {
    fn fetch_page(&self, filter: &str, limit: u32, offset: u32) -> Result<String> {
        tracing::debug!(%filter, limit, offset, "requesting page");

        let query = [
            ("search", filter.to_string()),
            ("limit", limit.to_string()),
            ("startfrom", offset.to_string()),
        ];
        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .map_err(|source| HarvestError::Transport { offset, source })?;

        let response = response
            .error_for_status()
            .map_err(|source| HarvestError::Transport { offset, source })?;

        let body = response
            .text()
            .map_err(|source| HarvestError::Transport { offset, source })?;

        Ok(body)
    }
}
