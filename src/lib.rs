//! Storefront client: the signin call against the shop backend and the
//! design-token theme shared with the UI layer.
//!
//! The two halves are independent. [`service::auth::signin`] goes through
//! the [`api::Fetch`] seam; [`theme`] is pure static data.

pub mod api;
pub mod config;
pub mod service;

pub use theme;

#[cfg(test)]
mod test_support;
