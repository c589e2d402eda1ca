//! API configuration parsed from environment variables.

pub const DEFAULT_API_ROOT_URL: &str = "http://localhost:5000";
pub const DEFAULT_API_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_API_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_API_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_root_url: String,
    pub timeouts: ApiTimeouts,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { api_root_url: DEFAULT_API_ROOT_URL.to_owned(), timeouts: ApiTimeouts::default() }
    }
}

impl ApiConfig {
    /// Build typed API config from environment variables.
    ///
    /// Optional:
    /// - `API_ROOT_URL`: default `http://localhost:5000`
    /// - `API_REQUEST_TIMEOUT_SECS`: default 30
    /// - `API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// The root URL is kept verbatim; trailing slashes are handled where
    /// request paths are joined.
    #[must_use]
    pub fn from_env() -> Self {
        let api_root_url = std::env::var("API_ROOT_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_ROOT_URL.to_owned());
        let timeouts = ApiTimeouts {
            request_secs: env_parse_u64("API_REQUEST_TIMEOUT_SECS", DEFAULT_API_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("API_CONNECT_TIMEOUT_SECS", DEFAULT_API_CONNECT_TIMEOUT_SECS),
        };
        Self { api_root_url, timeouts }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
