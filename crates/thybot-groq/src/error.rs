use reqwest::StatusCode;
use thybot_core::error::ThyBotError;

/// Every failure mode the HTTP client can hit.
#[derive(Debug, thiserror::Error)]
pub enum GroqError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("API format error: {0}")]
    Format(String),

    #[error("invalid API key header: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<GroqError> for ThyBotError {
    fn from(value: GroqError) -> Self {
        ThyBotError::Backend(Box::new(value))
    }
}
