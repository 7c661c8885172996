//! The system message for the general thyroid chat.

use thybot_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};
use thybot_prompt::builder::PromptBuilder;

use crate::{outputs::NEED_WEB_SENTINEL, style::ResponseStyle};

/// ThyBot's persona, tailored to the patient's thyroid status and the chosen
/// response style.
///
/// The model is also told to answer with exactly [`NEED_WEB_SENTINEL`] when it
/// is not reasonably certain.
///
/// ```rust
/// use thybot_core::template::IntoPrompt;
/// use thybot_types::{fragments::ThyroidAssistantFragment, style::ResponseStyle};
///
/// let msg = ThyroidAssistantFragment::new("Normal", ResponseStyle::Concise).into_prompt();
/// assert!(msg[0].content.contains("thyroid status is 'Normal'"));
/// assert!(msg[0].content.contains("[[NEED_WEB]]"));
/// ```
#[derive(Debug, Clone)]
pub struct ThyroidAssistantFragment {
    thyroid_status: String,
    style: ResponseStyle,
}

impl ThyroidAssistantFragment {
    pub fn new(thyroid_status: impl Into<String>, style: ResponseStyle) -> Self {
        Self {
            thyroid_status: thyroid_status.into(),
            style,
        }
    }
}

impl IntoPrompt for ThyroidAssistantFragment {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let content = PromptBuilder::new()
            .add_line(
                "You are ThyBot, an expert AI medical assistant specializing in thyroid health.",
            )
            .add_line(format!(
                "The user's thyroid status is '{}'.",
                self.thyroid_status
            ))
            .add_line(format!("Your response style should be {}.", self.style))
            .add_line(format!(
                "If you are not reasonably certain of the answer, reply with exactly \
                 {NEED_WEB_SENTINEL} and nothing else."
            ))
            .finalize_trimmed();

        vec![GenericMessage::new(content, GenericRole::System)]
    }
}
