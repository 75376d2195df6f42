//! Client-side data access for the smarthome dashboard.
//!
//! [`store::DataStore`] owns the session's snapshot of profile and
//! notification state; [`api::ApiClient`] performs the individual fetches.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod util;
