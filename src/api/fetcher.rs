//! Fetch helper — one HTTP round trip plus JSON decode.
//!
//! DESIGN
//! ======
//! [`Fetch`] is the transport seam: it takes a URL and a fetch-style
//! [`RequestOptions`] and yields the raw body of a 2xx response. Decoding
//! lives in [`fetcher`] so every implementation (the real [`HttpFetcher`],
//! test doubles) gets the same parse-failure behavior.
//!
//! No retries, no backoff. Timeouts are whatever the HTTP client was built
//! with.

use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::FetchError;
use crate::config::{ApiConfig, ApiTimeouts};

// =============================================================================
// REQUEST OPTIONS
// =============================================================================

/// Method, headers and body for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self { method, headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    #[must_use]
    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Encode `value` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Encode`] if `value` cannot be serialized.
    pub fn with_json_body(mut self, value: &impl Serialize) -> Result<Self, FetchError> {
        let body = serde_json::to_string(value).map_err(|e| FetchError::Encode(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    /// First header value matching `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// =============================================================================
// FETCH TRAIT
// =============================================================================

/// Transport abstraction. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Fetch: Send + Sync {
    /// Perform one request and return the body of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] on transport failure and
    /// [`FetchError::Status`] on a non-2xx response.
    async fn fetch(&self, url: &str, options: RequestOptions) -> Result<String, FetchError>;
}

/// Fetch `url` and decode the response body as JSON.
///
/// # Errors
///
/// Propagates any error from `fetch` unchanged, or returns
/// [`FetchError::Parse`] if the body is not valid JSON for `T`.
pub async fn fetcher<T, F>(fetch: &F, url: &str, options: RequestOptions) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
{
    let body = fetch.fetch(url, options).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

/// [`Fetch`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the TLS backend or client
    /// cannot be initialized.
    pub fn new(timeouts: ApiTimeouts) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        Ok(Self { http })
    }

    /// # Errors
    ///
    /// See [`HttpFetcher::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(config.timeouts)
    }
}

#[async_trait::async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str, options: RequestOptions) -> Result<String, FetchError> {
        let RequestOptions { method, headers, body } = options;
        tracing::debug!(%method, %url, "fetch request");

        let mut request = self.http.request(method, url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        // Body is never logged: it carries credentials.
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), %url, "fetch response");
        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), %url, "fetch returned non-success status");
            return Err(FetchError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[cfg(test)]
#[path = "fetcher_test.rs"]
mod tests;
