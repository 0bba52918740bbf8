//! Inspector HTTP client.
//!
//! # Responsibilities
//! - Validate the target URL before any network activity
//! - Issue a single GET and return the raw body
//! - Parse echo-server responses into snapshots, keeping the raw body on
//!   failure
//! - Produce the output string for each operation

use reqwest::StatusCode;
use url::Url;

use crate::http::snapshot::RequestSnapshot;
use crate::inspect::error::InspectError;
use crate::inspect::views;

/// A fetched response: status plus raw body.
#[derive(Debug)]
pub struct FetchedBody {
    pub status: StatusCode,
    pub body: String,
}

/// Client for querying an echo server.
///
/// One blocking-style call per invocation; no timeout is configured beyond
/// reqwest's defaults.
pub struct Inspector {
    http: reqwest::Client,
}

impl Inspector {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Single GET to the target, returning status and raw body.
    ///
    /// A non-2xx status is surfaced as a warning, not an error: the body is
    /// still returned so a later parse failure reports what came back.
    pub async fn fetch(&self, url: &str) -> Result<FetchedBody, InspectError> {
        Url::parse(url).map_err(|source| InspectError::InvalidUrl {
            url: url.to_owned(),
            source,
        })?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| InspectError::Network {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = %status,
                url = %url,
                "Received non-2xx status"
            );
        }

        let body = response
            .text()
            .await
            .map_err(|source| InspectError::Network {
                url: url.to_owned(),
                source,
            })?;

        Ok(FetchedBody { status, body })
    }

    /// Fetch and parse a snapshot from an echo server.
    pub async fn snapshot(&self, url: &str) -> Result<RequestSnapshot, InspectError> {
        let fetched = self.fetch(url).await?;
        parse_snapshot(url, &fetched.body)
    }

    /// Raw test request: status line plus body, verbatim, no parsing.
    pub async fn test_request(&self, url: &str) -> Result<String, InspectError> {
        let fetched = self.fetch(url).await?;
        Ok(format!(
            "Response from {} (Status: {}):\n{}",
            url, fetched.status, fetched.body
        ))
    }

    /// Client IP as reported by the echo server (X-Forwarded-For precedence).
    pub async fn client_ip(&self, url: &str) -> Result<String, InspectError> {
        let snapshot = self.snapshot(url).await?;
        Ok(views::client_ip(&snapshot))
    }

    /// Request headers as reported by the echo server, as indented JSON.
    pub async fn header_dump(&self, url: &str) -> Result<String, InspectError> {
        let snapshot = self.snapshot(url).await?;
        Ok(views::header_dump(&snapshot)?)
    }

    /// Proxy chain visualization for the request seen by the echo server.
    pub async fn proxy_chain(&self, url: &str) -> Result<String, InspectError> {
        let snapshot = self.snapshot(url).await?;
        Ok(views::proxy_chain(&snapshot))
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a response body as a YAML snapshot, keeping the offending body in
/// the error.
pub fn parse_snapshot(url: &str, body: &str) -> Result<RequestSnapshot, InspectError> {
    serde_yaml::from_str(body).map_err(|source| InspectError::Parse {
        url: url.to_owned(),
        source,
        body: body.to_owned(),
    })
}
