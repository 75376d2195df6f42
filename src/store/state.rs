//! Shared snapshot of the dashboard's user and notification state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::{ApiClient, FetchError};
use crate::config::{Config, RefreshMode};
use crate::model::ClientSnapshot;

/// Handle to the session's snapshot plus the client that populates it.
///
/// Construct one per session and pass it to whatever needs it. Clones share
/// the same snapshot. Each write is a single short lock taken after the
/// corresponding fetch has resolved, so readers never see a half-written
/// field. Overlapping refreshes are last-write-wins.
#[derive(Clone)]
pub struct DataStore {
    client: ApiClient,
    refresh_mode: RefreshMode,
    snapshot: Arc<RwLock<ClientSnapshot>>,
}

impl DataStore {
    /// Create a store with an empty snapshot and sequential refresh.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            refresh_mode: RefreshMode::default(),
            snapshot: Arc::new(RwLock::new(ClientSnapshot::default())),
        }
    }

    /// Build the client and store from configuration.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let client = ApiClient::new(&config.api)?;
        Ok(Self::new(client).with_refresh_mode(config.store.refresh_mode))
    }

    pub fn with_refresh_mode(mut self, refresh_mode: RefreshMode) -> Self {
        self.refresh_mode = refresh_mode;
        self
    }

    pub fn refresh_mode(&self) -> RefreshMode {
        self.refresh_mode
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Get a copy of the current snapshot.
    pub fn snapshot(&self) -> ClientSnapshot {
        self.snapshot.read().clone()
    }

    /// Refresh the user profile and notification count.
    ///
    /// In sequential mode the count request starts only once the profile has
    /// arrived and been written; a failing count fetch leaves the new profile
    /// in place. In concurrent mode both requests run together and neither
    /// field changes unless both succeed.
    pub async fn refresh_core(&self) -> Result<(), FetchError> {
        match self.refresh_mode {
            RefreshMode::Sequential => {
                let profile = self.client.fetch_user_profile().await?;
                self.snapshot.write().user_data = profile;

                let count = self.client.fetch_notification_count().await?;
                self.snapshot.write().notification_count = count;
            }
            RefreshMode::Concurrent => {
                let (profile, count) = tokio::try_join!(
                    self.client.fetch_user_profile(),
                    self.client.fetch_notification_count()
                )?;

                let mut snapshot = self.snapshot.write();
                snapshot.user_data = profile;
                snapshot.notification_count = count;
            }
        }

        tracing::info!(mode = ?self.refresh_mode, "Core data refreshed");
        Ok(())
    }

    /// Fetch the notification list into the snapshot and mark it loaded.
    ///
    /// Returns the number of notifications received. On failure the snapshot
    /// is left untouched.
    pub async fn load_notifications(&self) -> Result<usize, FetchError> {
        let notifications = self.client.fetch_notification_list().await?;
        let len = notifications.len();

        {
            let mut snapshot = self.snapshot.write();
            snapshot.notifications = notifications;
            snapshot.notifications_loaded = true;
        }

        tracing::info!(count = len, "Notifications loaded");
        Ok(len)
    }

    /// Fetch only the notification count into the snapshot.
    pub async fn refresh_notification_count(&self) -> Result<i64, FetchError> {
        let count = self.client.fetch_notification_count().await?;
        self.snapshot.write().notification_count = count;
        Ok(count)
    }

    /// Record whether the UI has appended its end-of-list marker.
    pub fn set_notification_done_marker(&self, added: bool) {
        self.snapshot.write().notification_done_marker_added = added;
    }
}
