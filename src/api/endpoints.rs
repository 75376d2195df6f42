/// Profile of the signed-in user.
pub const USER_DATA: &str = "/api/user/data";

/// Ordered list of the user's notifications.
pub const NOTIFICATION_LIST: &str = "/api/user/notification/list";

/// Number of notifications, as a bare JSON integer.
pub const NOTIFICATION_COUNT: &str = "/api/user/notification/count";

/// Join an endpoint path onto a base URL, tolerating a trailing slash.
pub fn url_for(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint)
}
