use std::time::Duration;

use crate::config::WakeConfig;
use crate::errors::AppResult;

/// Thin client for the upstream wake endpoint. One attempt, bounded by a timeout.
#[derive(Clone)]
pub struct WakeClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl WakeClient {
    pub fn new(config: &WakeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn url_for(&self, username: &str) -> String {
        format!("{}/wake/{}", self.base_url, urlencoding::encode(username))
    }

    /// POST the wake call. `Ok(true)` only when the upstream answers 2xx.
    pub async fn wake(&self, username: &str) -> AppResult<bool> {
        let url = self.url_for(username);
        tracing::debug!("Sending wake request to {}", url);

        let response = self.http.post(&url).timeout(self.timeout).send().await?;
        Ok(response.status().is_success())
    }
}
