//! Conversion of arbitrary values into chat messages.
//!
//! Every prompt fragment in the workspace implements [`IntoPrompt`], and so do
//! the plain inputs the Chat Client must tolerate: a bare string (sent as a
//! single *user* message), one [`GenericMessage`] or a whole message list.
//!
//! ```rust
//! use thybot_core::template::IntoPrompt;
//! use thybot_core::generic::GenericRole;
//!
//! let messages = "What does TSH measure?".into_prompt();
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].role, GenericRole::User);
//! ```
use crate::generic::GenericMessage;

/// Converts a value into a series of chat messages.
///
/// Provider crates typically use [`GenericMessage`], but the `Message` type
/// stays an associated type so a fragment can target a richer struct without
/// dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

impl IntoPrompt for GenericMessage {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}

impl IntoPrompt for Vec<GenericMessage> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        self
    }
}

impl IntoPrompt for &str {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::user(self)]
    }
}

impl IntoPrompt for String {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::user(self)]
    }
}
