//! Configuration for the dashboard client.
//!
//! Loaded from a TOML file; every field has a default so a missing file
//! yields a working local setup.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, RefreshMode, StoreConfig};
