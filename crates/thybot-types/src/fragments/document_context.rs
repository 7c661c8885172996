//! System message for answering from an uploaded document.

use thybot_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};
use thybot_prompt::builder::PromptBuilder;

/// Confines the model to the retrieved document context.
#[derive(Debug, Clone)]
pub struct DocumentContextFragment {
    thyroid_status: String,
    context: String,
}

impl DocumentContextFragment {
    /// `passages` are joined with blank lines, in retrieval order.
    pub fn new<I, S>(thyroid_status: impl Into<String>, passages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let context = passages
            .into_iter()
            .map(|p| p.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join("\n\n");

        Self {
            thyroid_status: thyroid_status.into(),
            context,
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }
}

impl IntoPrompt for DocumentContextFragment {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let text = PromptBuilder::new()
            .add_line(
                "You are ThyBot, an expert AI assistant. Answer questions based ONLY on the \
                 provided document context.",
            )
            .add_line(format!(
                "The user's thyroid status is '{}'.",
                self.thyroid_status
            ))
            .add_blank_line()
            .add_fenced_block("CONTEXT", self.context)
            .finalize_trimmed();

        vec![GenericMessage::new(text, GenericRole::System)]
    }
}
