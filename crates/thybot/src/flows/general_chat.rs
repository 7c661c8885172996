//! General thyroid Q&A with a web search fallback.
//!
//! The model is asked first. When its reply signals or exhibits low
//! confidence (see [`crate::confidence`]) the original question is searched
//! on the web and the model summarises the hits instead. Whatever happens,
//! exactly one assistant message is appended to the conversation.
use thybot_core::{
    ThyBotClient,
    generic::GenericMessage,
    provider::{ChatCompletionProvider, WebSearchProvider},
};
use thybot_prompt::chain::PromptChain;
use thybot_types::{
    fragments::{HistoryFragment, ThyroidAssistantFragment},
    outputs::{ChatTurn, TurnSource},
    style::ResponseStyle,
};

use super::{error_turn, search_summary::summarize_search_for_thyroid};
use crate::{
    config::{DEFAULT_HISTORY_LIMIT, DEFAULT_SEARCH_RESULTS},
    confidence::assess_reply,
    conversation::Conversation,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralChatOptions {
    pub thyroid_status: String,
    pub style: ResponseStyle,
    /// Most recent messages sent along; `None` sends all of them.
    pub history_limit: Option<usize>,
    pub search_results: usize,
}

impl Default for GeneralChatOptions {
    fn default() -> Self {
        Self {
            thyroid_status: thybot_types::profile::STATUS_NOT_SPECIFIED.to_owned(),
            style: ResponseStyle::default(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            search_results: DEFAULT_SEARCH_RESULTS,
        }
    }
}

/// Append `question` to `conversation`, answer it and append the answer.
pub async fn answer_general_question<B, S>(
    client: &ThyBotClient<B>,
    search: &S,
    conversation: &mut Conversation,
    question: &str,
    options: &GeneralChatOptions,
) -> ChatTurn
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
    S: WebSearchProvider + ?Sized,
{
    conversation.push_user(question);

    let prompt = PromptChain::new()
        .with(ThyroidAssistantFragment::new(
            options.thyroid_status.as_str(),
            options.style,
        ))
        .with(HistoryFragment::new(
            conversation.messages(),
            options.history_limit,
        ))
        .build();
    tracing::debug!(messages = prompt.len(), "asking the model");

    let turn = match client.invoke(prompt).await {
        Err(e) => {
            tracing::warn!(error = %e, "chat completion failed");
            error_turn("Failed to get a response", e)
        }
        Ok(text) => {
            let reply = assess_reply(text);
            if reply.needs_search_fallback() {
                tracing::info!("low-confidence reply, falling back to web search");
                search_and_summarize(client, search, question, options.search_results).await
            } else {
                ChatTurn::new(TurnSource::Model, reply.text)
            }
        }
    };

    conversation.push_assistant(turn.text.clone());
    turn
}

async fn search_and_summarize<B, S>(
    client: &ThyBotClient<B>,
    search: &S,
    question: &str,
    max_results: usize,
) -> ChatTurn
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
    S: WebSearchProvider + ?Sized,
{
    match search.search(question, max_results).await {
        Ok(hits) => summarize_search_for_thyroid(client, question, &hits).await,
        Err(e) => {
            tracing::warn!(error = %e, "web search failed");
            error_turn("Web search failed", e)
        }
    }
}
