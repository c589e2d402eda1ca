//! API types — request context, response payloads and errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::ApiConfig;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the fetch helper.
///
/// Callers above the fetch helper surface these verbatim.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success HTTP status.
    #[error("unexpected response status {status}")]
    Status { status: u16, body: String },

    /// The request body could not be encoded as JSON.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl FetchError {
    /// HTTP status code, when the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for 401 and 403 responses.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

/// Caller-supplied bundle identifying the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiContext {
    pub api_root_url: String,
}

impl ApiContext {
    pub fn new(api_root_url: impl Into<String>) -> Self {
        Self { api_root_url: api_root_url.into() }
    }
}

impl From<&ApiConfig> for ApiContext {
    fn from(config: &ApiConfig) -> Self {
        Self::new(config.api_root_url.clone())
    }
}

// =============================================================================
// USER
// =============================================================================

/// The signed-in user as returned by the backend.
///
/// The backend owns the shape; this wrapper keeps the decoded object as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Map<String, Value>);

impl User {
    /// Field lookup by wire name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for User {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
