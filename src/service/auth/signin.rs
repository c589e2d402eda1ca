//! `POST /auth/signin` — exchange credentials for the signed-in user.
//!
//! ERROR HANDLING
//! ==============
//! Whatever the fetch helper returns is handed back untouched: no retry, no
//! reclassification, no logging here. Credentials are not validated; the
//! backend decides what an acceptable username or password is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::{ApiContext, Fetch, FetchError, RequestOptions, User, fetcher};

pub const SIGNIN_PATH: &str = "/auth/signin";

/// Credentials sent to the signin endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninParams {
    pub username: String,
    pub password: String,
}

impl SigninParams {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for SigninParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigninParams")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Full signin URL for `context`. Trailing slashes on the root are dropped
/// so the path is joined with exactly one `/`.
#[must_use]
pub fn signin_url(context: &ApiContext) -> String {
    format!("{}{SIGNIN_PATH}", context.api_root_url.trim_end_matches('/'))
}

/// Sign in with `params` against the backend named by `context`.
///
/// Performs exactly one request.
///
/// # Errors
///
/// Returns the fetch helper's [`FetchError`] as-is: transport failures,
/// non-success statuses (including 401) and malformed response bodies.
pub async fn signin<F>(fetch: &F, context: &ApiContext, params: &SigninParams) -> Result<User, FetchError>
where
    F: Fetch + ?Sized,
{
    let options = RequestOptions::post()
        .with_header("Accept", "application/json")
        .with_header("Content-Type", "application/json")
        .with_json_body(params)?;
    fetcher(fetch, &signin_url(context), options).await
}

#[cfg(test)]
#[path = "signin_test.rs"]
mod tests;
