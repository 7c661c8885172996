//! Application-level errors.
//!
//! Only two kinds of failure leave a flow as `Err`: input ThyBot cannot work
//! with (an unsupported or empty document, an unreadable nutrition table) and
//! a missing precondition (no profile before a meal analysis). Failures of
//! the model or the search engine are turned into the assistant's reply
//! instead; see [`crate::flows`].

use thiserror::Error;
use thybot_core::error::ThyBotError;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file type: `{extension}` (expected pdf, docx or txt)")]
    UnsupportedFileType { extension: String },

    #[error("could not read {file_name}: {reason}")]
    Unreadable { file_name: String, reason: String },

    #[error("{file_name} contains no extractable text")]
    EmptyDocument { file_name: String },

    #[error("failed to embed document: {0}")]
    Embedding(#[from] ThyBotError),
}

#[derive(Debug, Error)]
pub enum MealError {
    #[error("please create a patient profile first to get tailored meal analysis")]
    MissingProfile,

    #[error("no items in the meal")]
    EmptyMeal,
}

#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("failed to read nutrition table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to access nutrition table: {0}")]
    Io(#[from] std::io::Error),

    #[error("nutrition table has no `{0}` column")]
    MissingColumn(&'static str),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search engine returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid result pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<SearchError> for ThyBotError {
    fn from(value: SearchError) -> Self {
        ThyBotError::Backend(Box::new(value))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
