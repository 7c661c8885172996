//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](thybot_core::template::IntoPrompt).
//!
//! ```text
//! ┌──────────────────┐    IntoPrompt     ┌────────────────┐
//! │ PersonaFragment  │ ─────────────────►│ Vec<Message>   │
//! ├──────────────────┤                   ├────────────────┤
//! │ HistoryFragment  │ ─────────────────►│ Vec<Message>   │
//! ├──────────────────┤                   ├────────────────┤
//! │ user question    │ ─────────────────►│ Vec<Message>   │
//! └──────────────────┘                   └────────────────┘
//!            ▲                                     │
//!            └────────── PromptChain::build() ◄────┘
//! ```
//!
//! Every ThyBot request is assembled the same way: a system fragment first,
//! then (optionally) some history, then the user's turn. `PromptChain` lines
//! these up without mutable vectors or `extend()` calls.
//!
//! ```rust
//! use thybot_prompt::chain::PromptChain;
//! use thybot_core::generic::GenericMessage;
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(GenericMessage::system("You are ThyBot."))
//!     .with_opt(None::<GenericMessage>)
//!     .with("What is TSH?")
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
use thybot_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The single `Vec` field is kept private so the only way to obtain the result
/// is through [`Self::build`].
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Append `with` only when it is present.
    pub fn with_opt(self, with: Option<impl IntoPrompt<Message = Message>>) -> Self {
        match with {
            Some(with) => self.with(with),
            None => self,
        }
    }

    /// Number of messages collected so far.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
