//! Data shapes served by the dashboard API and the snapshot that holds them.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as served by `/api/user/data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub forename: String,
    pub surname: String,
    /// Accent color chosen by the user (e.g., "#ff0000").
    pub primary_color: String,
}

/// A single user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: i64,
    pub priority: i64,
    pub name: String,
    pub description: String,
    /// Creation date exactly as the server formats it.
    pub date: String,
}

/// Current known user and notification state.
///
/// `notification_count` is fetched from its own endpoint and is not derived
/// from `notifications.len()`; the two may disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSnapshot {
    pub user_data: UserProfile,
    pub notifications: Vec<NotificationItem>,
    pub notification_count: i64,
    /// Set once the notification list has been fetched at least once.
    pub notifications_loaded: bool,
    /// Owned by UI logic; the store only records it.
    pub notification_done_marker_added: bool,
}
