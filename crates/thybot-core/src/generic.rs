//! Generic message and role types used by every ThyBot crate.
//!
//! They mirror the three roles exposed by chat-completion APIs: “system”,
//! “user” and “assistant”. Back-ends convert them into their own wire structs
//! via `From`/`Into`, so the flows and the session never see provider types.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message, independent of any specific LLM provider.
///
/// This is also the unit stored in a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: String,
    pub role: GenericRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use thybot_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are ThyBot.".into(), GenericRole::System);
    /// assert_eq!(sys.role, GenericRole::System);
    /// ```
    pub fn new(message: String, role: GenericRole) -> Self {
        Self {
            content: message,
            role,
            name: None,
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self::new(message.into(), GenericRole::System)
    }

    pub fn user(message: impl Into<String>) -> Self {
        Self::new(message.into(), GenericRole::User)
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        Self::new(message.into(), GenericRole::Assistant)
    }

    pub fn with_name(mut self, name: impl ToString) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Chat roles recognised by chat-completion providers.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// “System” messages define global behaviour and style guidelines.
    System,
    /// Messages produced by the assistant / model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// The normalised reply of a chat completion.
///
/// Back-ends fill `message.content` with an empty string when the provider
/// returned no text, so callers never have to probe for a missing field.
#[derive(Debug, Clone)]
pub struct GenericChatCompletionResponse {
    pub message: GenericMessage,
    pub usage: Option<GenericUsageReport>,
}

impl GenericChatCompletionResponse {
    pub fn text(&self) -> &str {
        &self.message.content
    }

    pub fn into_text(self) -> String {
        self.message.content
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

/// One result returned by a web search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl Display for SearchHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.title, self.snippet, self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_renders_lowercase() {
        assert_eq!(GenericRole::Assistant.to_string(), "assistant");
        let json = serde_json::to_string(&GenericMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"content":"hi","role":"user"}"#);
    }

    #[test]
    fn search_hit_formats_like_a_result_line() {
        let hit = SearchHit {
            title: "Thyroid".into(),
            snippet: "A gland in the neck.".into(),
            link: "https://example.org".into(),
        };
        assert_eq!(
            hit.to_string(),
            "Thyroid - A gland in the neck. (https://example.org)"
        );
    }
}
