//! Prompt that turns web search hits into a grounded answer.

use thybot_core::{
    generic::{GenericMessage, SearchHit},
    template::IntoPrompt,
};
use thybot_prompt::builder::PromptBuilder;

/// Asks the model to answer `question` strictly from `hits`.
#[derive(Debug, Clone, Copy)]
pub struct SearchResultsFragment<'a> {
    question: &'a str,
    hits: &'a [SearchHit],
}

impl<'a> SearchResultsFragment<'a> {
    pub fn new(question: &'a str, hits: &'a [SearchHit]) -> Self {
        Self { question, hits }
    }
}

impl IntoPrompt for SearchResultsFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let text = PromptBuilder::new()
            .add_line("You are ThyBot, an assistant specializing in thyroid health.")
            .add_line(
                "Answer the question below using ONLY the web search results listed. \
                 Do not add facts, numbers or recommendations that are not stated in \
                 the results. If the results do not answer the question, say so.",
            )
            .add_line("Keep the answer short and mention which sources support it.")
            .add_blank_line()
            .add_key_value("Question", self.question)
            .add_blank_line()
            .add_line("Search results:")
            .add_numbered(self.hits)
            .finalize_trimmed();

        vec![GenericMessage::user(text)]
    }
}
