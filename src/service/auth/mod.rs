//! Authentication endpoints.

pub mod signin;

pub use signin::{SigninParams, signin};
