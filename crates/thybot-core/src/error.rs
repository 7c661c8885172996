//! Unified error type exposed by **`thybot-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the [`crate::ThyBotClient`]. The flows never
//! propagate these to the user as a crash; they render them as text.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ThyBotError>;

#[derive(Debug, Error)]
pub enum ThyBotError {
    /// The selected backend does not recognise the requested `model`.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported {
        provider: &'static str,
        model: String,
    },

    /// Failure while serialising or deserialising JSON payloads sent to / received
    /// from a provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid: {0}")]
    Invalid(String),
}
