use thiserror::Error;

/// Message shown when the remote has no activity for the request, either
/// because it answered 404 or because a filter matched nothing.
pub const NO_MATCH_MESSAGE: &str = "There is no match for this activity!";

/// Classified failure of a call to the remote activity API.
///
/// Every failure falls into exactly one variant, checked in a fixed order:
/// a response with a bad status, then no response at all, then a request
/// that never made it out (or whose body could not be read back).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("remote responded with status {code} ({text})")]
    Status { code: u16, text: String },

    #[error("no response from remote: {0}")]
    NoResponse(String),

    #[error("request setup failed: {0}")]
    Setup(String),
}

impl ApiError {
    /// Classify a non-success response status. The text is the canonical
    /// reason phrase for the code, or "Unknown" for codes without one.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        ApiError::Status {
            code: status.as_u16(),
            text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// The message rendered on the page for this failure.
    ///
    /// A 404 gets the friendly no-match wording; every other status reports
    /// its code and reason phrase.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { code: 404, .. } => NO_MATCH_MESSAGE.to_string(),
            ApiError::Status { code, text } => {
                format!("Failed with status {}: {}", code, text)
            }
            ApiError::NoResponse(message) => {
                format!("No response received from server: {}", message)
            }
            ApiError::Setup(message) => {
                format!("Something is not right with the request setup: {}", message)
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() {
            ApiError::Setup(err.to_string())
        } else {
            ApiError::NoResponse(err.to_string())
        }
    }
}

/// Result type for activity API operations
pub type ApiResult<T> = Result<T, ApiError>;
