//! Question answering over one uploaded document.
use std::sync::Arc;

use thybot_core::{
    ThyBotClient,
    generic::GenericMessage,
    provider::{ChatCompletionProvider, EmbeddingProvider},
};
use thybot_prompt::chain::PromptChain;
use thybot_types::{
    fragments::DocumentContextFragment,
    outputs::{ChatTurn, TurnSource},
};

use super::error_turn;
use crate::{
    config::DEFAULT_TOP_K,
    conversation::Conversation,
    error::IngestError,
    index::VectorIndex,
    ingest::{SplitterConfig, chunk_document},
};

/// A document conversation: the index built from the upload and the
/// messages exchanged about it. Dropping it discards both.
#[derive(Debug)]
pub struct DocumentChat {
    file_name: String,
    index: VectorIndex,
    conversation: Conversation,
    top_k: usize,
}

impl DocumentChat {
    /// Read, split and embed an uploaded file. On success the conversation
    /// starts with a short greeting naming the file.
    pub async fn from_upload(
        file_name: &str,
        bytes: &[u8],
        splitter: &SplitterConfig,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self, IngestError> {
        let chunks = chunk_document(file_name, bytes, splitter)?;
        let index = VectorIndex::build(chunks, embedder).await?;

        let mut conversation = Conversation::new();
        conversation.push_assistant(format!(
            "I've finished reading **{file_name}**. What would you like to know?"
        ));

        Ok(Self {
            file_name: file_name.to_owned(),
            index,
            conversation,
            top_k: DEFAULT_TOP_K,
        })
    }

    /// Number of chunks retrieved per question.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn chunk_count(&self) -> usize {
        self.index.len()
    }

    /// Answer `question` from the most relevant chunks only. Earlier
    /// messages are not sent to the model.
    pub async fn ask<B>(
        &mut self,
        client: &ThyBotClient<B>,
        question: &str,
        thyroid_status: &str,
    ) -> ChatTurn
    where
        B: ChatCompletionProvider,
        GenericMessage: Into<B::Message>,
    {
        self.conversation.push_user(question);

        let turn = match self.index.query(question, self.top_k).await {
            Err(e) => {
                tracing::warn!(error = %e, "document retrieval failed");
                error_turn("Failed to search the document", e)
            }
            Ok(retrieved) => {
                tracing::debug!(chunks = retrieved.len(), file = %self.file_name, "retrieved context");
                let prompt = PromptChain::new()
                    .with(DocumentContextFragment::new(
                        thyroid_status,
                        retrieved.iter().map(|r| r.chunk.text.as_str()),
                    ))
                    .with(question)
                    .build();

                match client.invoke(prompt).await {
                    Ok(text) => ChatTurn::new(TurnSource::Model, text),
                    Err(e) => {
                        tracing::warn!(error = %e, "document answer failed");
                        error_turn("Failed to get a response", e)
                    }
                }
            }
        };

        self.conversation.push_assistant(turn.text.clone());
        turn
    }
}

#[cfg(test)]
mod tests {
    use thybot_core::generic::GenericRole;

    use super::*;
    use crate::{index::HashingEmbedder, test_support::ScriptedProvider};

    const LEAFLET: &str = "Levothyroxine should be taken on an empty stomach.\n\n\
                           Calcium and iron supplements reduce absorption of levothyroxine.\n\n\
                           Store the tablets below 25 degrees.";

    async fn upload() -> DocumentChat {
        DocumentChat::from_upload(
            "leaflet.txt",
            LEAFLET.as_bytes(),
            &SplitterConfig {
                chunk_size: 70,
                chunk_overlap: 0,
            },
            Arc::new(HashingEmbedder::default()),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn upload_seeds_greeting() {
        let chat = upload().await;
        assert_eq!(chat.file_name(), "leaflet.txt");
        assert_eq!(chat.chunk_count(), 3);
        assert_eq!(
            chat.conversation().last().unwrap().content,
            "I've finished reading **leaflet.txt**. What would you like to know?"
        );
    }

    #[tokio::test]
    async fn unsupported_upload_builds_nothing() {
        let err = DocumentChat::from_upload(
            "scan.png",
            b"\x89PNG",
            &SplitterConfig::default(),
            Arc::new(HashingEmbedder::default()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFileType { .. }));
    }

    #[tokio::test]
    async fn ask_sends_context_and_question_only() {
        let mut chat = upload().await.with_top_k(1);
        let client = ScriptedProvider::new()
            .reply("Take calcium at a different time of day.")
            .reply("Below 25 degrees.")
            .into_client();

        chat.ask(&client, "Does calcium affect absorption?", "Hypothyroidism")
            .await;
        let turn = chat.ask(&client, "How should I store it?", "Hypothyroidism").await;
        assert_eq!(turn.source, TurnSource::Model);

        let requests = client.backend().requests();
        let first = &requests[0];
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].role, GenericRole::System);
        assert!(first[0].content.contains("Calcium and iron supplements"));
        assert!(first[0].content.contains("'Hypothyroidism'"));
        assert_eq!(first[1].content, "Does calcium affect absorption?");
        assert_eq!(requests[1].len(), 2);

        // greeting + two question/answer pairs
        assert_eq!(chat.conversation().len(), 5);
    }

    #[tokio::test]
    async fn model_failure_is_reported_in_the_conversation() {
        let mut chat = upload().await;
        let client = ScriptedProvider::new().fail("503").into_client();
        let turn = chat.ask(&client, "anything", "Normal").await;
        assert!(turn.is_error());
        assert_eq!(chat.conversation().last().unwrap().content, turn.text);
    }
}
