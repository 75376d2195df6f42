//! Typed access to the dashboard's user and notification endpoints.

mod client;
pub mod endpoints;
mod error;

pub use client::ApiClient;
pub use error::{FetchError, FetchErrorKind};
