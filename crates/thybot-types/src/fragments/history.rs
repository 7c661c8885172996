use thybot_core::{generic::GenericMessage, template::IntoPrompt};

/// The tail of a conversation.
///
/// `limit = None` keeps the whole history; `Some(n)` keeps the `n` most recent
/// messages in their original order. The newest message is always kept, so
/// `Some(0)` behaves like `Some(1)`.
#[derive(Debug, Clone, Copy)]
pub struct HistoryFragment<'a> {
    messages: &'a [GenericMessage],
    limit: Option<usize>,
}

impl<'a> HistoryFragment<'a> {
    pub fn new(messages: &'a [GenericMessage], limit: Option<usize>) -> Self {
        Self { messages, limit }
    }

    pub fn window(&self) -> &'a [GenericMessage] {
        match self.limit {
            Some(limit) => &self.messages[self.messages.len().saturating_sub(limit.max(1))..],
            None => self.messages,
        }
    }
}

impl IntoPrompt for HistoryFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        self.window().to_vec()
    }
}
