use std::time::Duration;

use reqwest::header::COOKIE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Number;

use crate::api::endpoints::{self, url_for};
use crate::api::error::FetchError;
use crate::config::ApiConfig;
use crate::model::{NotificationItem, UserProfile};

/// HTTP accessors for the dashboard API.
///
/// Each accessor issues exactly one GET and either returns the parsed body
/// or the failure. Nothing is retried or cached here.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64));
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds as u64));
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            session_cookie: config.session_cookie.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the signed-in user's profile.
    pub async fn fetch_user_profile(&self) -> Result<UserProfile, FetchError> {
        self.get_json(endpoints::USER_DATA).await
    }

    /// Fetch all notifications in server order.
    pub async fn fetch_notification_list(&self) -> Result<Vec<NotificationItem>, FetchError> {
        self.get_json(endpoints::NOTIFICATION_LIST).await
    }

    /// Fetch the notification count.
    ///
    /// The body must be a whole JSON number. `7` and `7.0` both yield 7;
    /// `7.5` or `"7"` is a parse failure.
    pub async fn fetch_notification_count(&self) -> Result<i64, FetchError> {
        let endpoint = endpoints::NOTIFICATION_COUNT;
        let number: Number = self.get_json(endpoint).await?;

        whole_number(&number).ok_or_else(|| {
            let err = FetchError::Parse {
                endpoint,
                source: serde::de::Error::custom(format!(
                    "expected a whole number, found {}",
                    number
                )),
            };
            tracing::warn!(endpoint, error_type = err.error_type(), error = %err, "Fetch failed");
            err
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, FetchError> {
        let result = self.do_get(endpoint).await;
        if let Err(ref err) = result {
            tracing::warn!(
                endpoint,
                error_type = err.error_type(),
                error = %err,
                "Fetch failed"
            );
        }
        result
    }

    async fn do_get<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, FetchError> {
        let mut builder = self.client.get(url_for(&self.base_url, endpoint));
        if let Some(cookie) = &self.session_cookie {
            builder = builder.header(COOKIE, cookie);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        let status = response.status();
        tracing::debug!(endpoint, status = status.as_u16(), "Response received");

        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Parse { endpoint, source })
    }
}

/// Integer value of a JSON number with no fractional part.
fn whole_number(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }

    let value = number.as_f64()?;
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
