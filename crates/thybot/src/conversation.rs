use thybot_core::generic::{GenericMessage, GenericRole};

/// Ordered chat history of one conversation. Append-only; can be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<GenericMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(GenericMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(GenericMessage::assistant(content));
    }

    pub fn messages(&self) -> &[GenericMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&GenericMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn count_role(&self, role: GenericRole) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_clears() {
        let mut conversation = Conversation::new();
        conversation.push_user("Is coffee ok with levothyroxine?");
        conversation.push_assistant("Wait 30 to 60 minutes after the tablet.");

        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[0].role, GenericRole::User);
        assert_eq!(conversation.count_role(GenericRole::Assistant), 1);
        assert_eq!(
            conversation.last().map(|m| m.content.as_str()),
            Some("Wait 30 to 60 minutes after the tablet.")
        );

        conversation.clear();
        assert!(conversation.is_empty());
    }
}
