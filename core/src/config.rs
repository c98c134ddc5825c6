use serde::{Deserialize, Serialize};

/// Default base URL of the remote activity API.
pub const DEFAULT_BASE_URL: &str = "https://bored-api.appbrewery.com";

/// Default per-request timeout, in seconds. A response must arrive within
/// this bound or the call is classified as receiving no response.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the activity API client
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the remote service, without the trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound on each outbound request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
