//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use dashstore::api::ApiClient;
use dashstore::config::{ApiConfig, RefreshMode};
use dashstore::store::DataStore;
use std::net::TcpListener;

pub const ALICE_JSON: &str =
    r##"{"username":"alice","forename":"Alice","surname":"Doe","primaryColor":"#ff0000"}"##;

pub const NOTIFICATIONS_JSON: &str = r#"[
    {"id": 3, "priority": 2, "name": "Door open", "description": "Front door left open", "date": "2022-03-01 10:00"},
    {"id": 1, "priority": 1, "name": "Backup", "description": "Nightly backup done", "date": "2022-03-01 03:00"},
    {"id": 2, "priority": 3, "name": "Update", "description": "New version available", "date": "2022-02-28 18:30"}
]"#;

/// Find a port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: Some(5),
        connect_timeout_seconds: 2,
        session_cookie: None,
    }
}

pub fn make_client(base_url: &str) -> ApiClient {
    ApiClient::new(&api_config(base_url)).expect("Failed to build client")
}

pub fn make_store(base_url: &str, mode: RefreshMode) -> DataStore {
    DataStore::new(make_client(base_url)).with_refresh_mode(mode)
}
