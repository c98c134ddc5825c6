use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::ApiConfig;
use crate::errors::{ApiError, ApiResult};
use crate::types::Activity;

/// Client for the remote activity API
#[derive(Debug, Clone)]
pub struct ActivityClient {
    client: Client,
    base_url: String,
}

impl ActivityClient {
    /// Create a new activity API client.
    ///
    /// The underlying HTTP client carries the configured request timeout so
    /// a silent remote cannot hold a page request open forever.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one random activity suggestion.
    pub async fn random(&self) -> ApiResult<Activity> {
        let url = format!("{}/random", self.base_url);
        debug!(url = %url, "requesting random activity");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }

        let activity = response.json::<Activity>().await?;
        Ok(activity)
    }

    /// Fetch every activity matching a type and participant count.
    ///
    /// Both values are placed in the query string exactly as given; the
    /// remote service owns their interpretation, including empty strings.
    pub async fn filter(
        &self,
        activity_type: &str,
        participants: &str,
    ) -> ApiResult<Vec<Activity>> {
        let url = format!(
            "{}/filter?type={}&participants={}",
            self.base_url, activity_type, participants
        );
        debug!(url = %url, "requesting filtered activities");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }

        let activities = response.json::<Vec<Activity>>().await?;
        Ok(activities)
    }
}
