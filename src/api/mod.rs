//! Client-side API plumbing: request context, user payload and the fetch
//! helper every service call goes through.

pub mod fetcher;
pub mod types;

pub use fetcher::{Fetch, HttpFetcher, RequestOptions, fetcher};
pub use types::{ApiContext, FetchError, User};
