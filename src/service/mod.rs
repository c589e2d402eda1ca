//! Backend service calls, grouped by API area.

pub mod auth;
