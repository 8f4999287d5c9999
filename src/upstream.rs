//! Outbound HTTP used by the `github` route.

use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Failure of an outbound GET.
#[derive(Debug)]
pub enum FetchError {
    /// Connecting, sending, timing out or reading the body failed
    Request { url: String, source: reqwest::Error },
    /// The upstream answered with a non-success status
    Status { url: String, status: u16 },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request { url, source } => {
                write!(f, "Query must point to a github repo ({}: {})", url, source)
            }
            FetchError::Status { url, status } => {
                write!(
                    f,
                    "Query must point to a github repo ({} returned status {})",
                    url, status
                )
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Request { source, .. } => Some(source),
            FetchError::Status { .. } => None,
        }
    }
}

/// Fetches a URL and returns the response body as text.
pub trait RepoFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking `reqwest` implementation with a fixed timeout.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("funserver/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeout })
    }
}

impl RepoFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, timeout_secs = self.timeout.as_secs(), "Fetching upstream");
        let request_err = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().map_err(request_err)?;
        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Upstream returned error status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(request_err)
    }
}
