//! The assembled assistant: one chat client plus the collaborators and
//! settings the flows need.
use std::sync::Arc;

use thybot_core::{
    ThyBotClient,
    generic::GenericMessage,
    provider::{ChatCompletionProvider, EmbeddingProvider, WebSearchProvider},
};
use thybot_types::outputs::ChatTurn;

use crate::{
    config::ThyBotConfig,
    error::{IngestError, MealError},
    flows::{self, DocumentChat, GeneralChatOptions, MealItemAnalysis},
    nutrition::NutritionTable,
    session::Session,
};

pub struct ThyBot<B> {
    client: ThyBotClient<B>,
    search: Arc<dyn WebSearchProvider>,
    embedder: Arc<dyn EmbeddingProvider>,
    nutrition: NutritionTable,
    config: ThyBotConfig,
}

impl<B> ThyBot<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(
        client: ThyBotClient<B>,
        search: Arc<dyn WebSearchProvider>,
        embedder: Arc<dyn EmbeddingProvider>,
        nutrition: NutritionTable,
        config: ThyBotConfig,
    ) -> Self {
        Self {
            client,
            search,
            embedder,
            nutrition,
            config,
        }
    }

    pub fn client(&self) -> &ThyBotClient<B> {
        &self.client
    }

    pub fn config(&self) -> &ThyBotConfig {
        &self.config
    }

    pub fn nutrition(&self) -> &NutritionTable {
        &self.nutrition
    }

    /// General chat turn for `session`.
    pub async fn chat(&self, session: &mut Session, question: &str) -> ChatTurn {
        let options = GeneralChatOptions {
            thyroid_status: session.thyroid_status(),
            style: session.style,
            history_limit: self.config.history_limit,
            search_results: self.config.search_results,
        };
        flows::answer_general_question(
            &self.client,
            self.search.as_ref(),
            &mut session.general,
            question,
            &options,
        )
        .await
    }

    /// Replace the session's document with `file_name`. On failure the
    /// previous document, if any, is left untouched.
    pub async fn upload<'s>(
        &self,
        session: &'s mut Session,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<&'s mut DocumentChat, IngestError> {
        let chat = DocumentChat::from_upload(
            file_name,
            bytes,
            &self.config.splitter,
            Arc::clone(&self.embedder),
        )
        .await?
        .with_top_k(self.config.top_k);
        Ok(session.start_document_chat(chat))
    }

    /// Document chat turn, or `None` when no document is loaded.
    pub async fn ask_document(&self, session: &mut Session, question: &str) -> Option<ChatTurn> {
        let status = session.thyroid_status();
        let chat = session.document_chat_mut()?;
        Some(chat.ask(&self.client, question, &status).await)
    }

    pub async fn analyze_meal(
        &self,
        session: &Session,
    ) -> Result<Vec<MealItemAnalysis>, MealError> {
        flows::analyze_meal(
            &self.client,
            &self.nutrition,
            &session.meal,
            session.profile(),
        )
        .await
    }
}
