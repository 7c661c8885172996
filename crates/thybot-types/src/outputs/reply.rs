//! Structured view of a model reply.
//!
//! The model is asked to answer with [`NEED_WEB_SENTINEL`] when it is unsure.
//! Call sites never compare against the sentinel themselves; they look at
//! [`AssistantReply::status`] instead.
use serde::{Deserialize, Serialize};

/// Exact reply the model is instructed to give when it is not reasonably
/// certain.
pub const NEED_WEB_SENTINEL: &str = "[[NEED_WEB]]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
    /// The reply can be shown as is.
    Answered,
    /// The reply signals or exhibits low confidence; a web search should
    /// replace it.
    NeedsSearch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub status: ReplyStatus,
    pub text: String,
}

impl AssistantReply {
    pub fn answered(text: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Answered,
            text: text.into(),
        }
    }

    pub fn needs_search(text: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::NeedsSearch,
            text: text.into(),
        }
    }

    pub fn needs_search_fallback(&self) -> bool {
        self.status == ReplyStatus::NeedsSearch
    }
}

/// Where the text of a finished chat turn came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnSource {
    /// Direct model answer.
    Model,
    /// Summary of live web search results.
    WebSearch,
    /// A fixed notice (e.g. no search results) produced without the model.
    Notice,
    /// An external call failed; the text describes the failure.
    Error,
}

/// The assistant message appended for one user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub source: TurnSource,
    pub text: String,
}

impl ChatTurn {
    pub fn new(source: TurnSource, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.source == TurnSource::Error
    }
}
