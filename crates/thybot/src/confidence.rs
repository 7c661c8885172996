//! Low-confidence detection for model replies.
//!
//! The rules are literal string checks. A short but correct answer that
//! contains a hedge word is still flagged.

use thybot_types::outputs::{AssistantReply, NEED_WEB_SENTINEL};

/// Replies shorter than this (in characters) are checked for hedge words.
pub const SHORT_REPLY_CHARS: usize = 40;

pub const HEDGE_WORDS: [&str; 4] = ["maybe", "unsure", "unclear", "unknown"];

pub const LOW_CONFIDENCE_PHRASES: [&str; 7] = [
    "i don't know",
    "not sure",
    "cannot find",
    "no information",
    "insufficient",
    "can't answer",
    "cannot answer",
];

/// `true` if `reply` signals or exhibits low confidence:
///
/// * it is empty (or whitespace),
/// * it is exactly the `[[NEED_WEB]]` sentinel (ignoring case and surrounding
///   whitespace),
/// * it is shorter than [`SHORT_REPLY_CHARS`] and contains a hedge word,
/// * it contains one of [`LOW_CONFIDENCE_PHRASES`].
pub fn needs_web_search(reply: &str) -> bool {
    let folded = reply.trim().to_lowercase().replace('\u{2019}', "'");

    if folded.is_empty() || folded == NEED_WEB_SENTINEL.to_lowercase() {
        return true;
    }

    if folded.chars().count() < SHORT_REPLY_CHARS
        && HEDGE_WORDS.iter().any(|word| folded.contains(word))
    {
        return true;
    }

    LOW_CONFIDENCE_PHRASES
        .iter()
        .any(|phrase| folded.contains(phrase))
}

/// Classify a raw model reply.
pub fn assess_reply(reply: impl Into<String>) -> AssistantReply {
    let text = reply.into();
    if needs_web_search(&text) {
        AssistantReply::needs_search(text)
    } else {
        AssistantReply::answered(text)
    }
}
