//! Generic, lightweight client that sends prompts to a single concrete
//! [`ChatCompletionProvider`] and returns plain reply text.
//!
//! This is the "Chat Client" every flow talks to. Its one job is the uniform
//! `invoke(messages) -> text` contract:
//!
//! * the input may be a string, a single message or a full message list
//!   (anything implementing [`IntoPrompt`]),
//! * the output is always the normalised reply text, whatever shape the
//!   provider's payload had.
//!
//! ```rust,no_run
//! # use thybot_core::{ThyBotClient, model::Model, provider::ChatCompletionProvider,
//! #                   generic::GenericMessage};
//! # async fn demo<B>(backend: B) -> thybot_core::error::Result<()>
//! # where B: ChatCompletionProvider, GenericMessage: Into<B::Message> {
//! let client = ThyBotClient::new(backend, Model::default());
//! let reply = client.invoke("What is Hashimoto's thyroiditis?").await?;
//! println!("{reply}");
//! # Ok(()) }
//! ```
use std::sync::Arc;

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    template::IntoPrompt,
};

/// A client bound to a single provider and model.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct ThyBotClient<B> {
    backend: Arc<B>,
    model: Model,
    temperature: Option<f64>,
}

impl<B> Clone for ThyBotClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}

impl<B> ThyBotClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B, model: Model) -> Self {
        Self {
            backend: Arc::new(backend),
            model,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Access the underlying backend (e.g. to inspect provider-specific state).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

impl<B> ThyBotClient<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    /// Send `prompt` to the model and return the full completion.
    pub async fn complete(
        &self,
        prompt: impl IntoPrompt<Message = GenericMessage>,
    ) -> Result<GenericChatCompletionResponse> {
        let mut params = ChatCompleteParameters::new(prompt.into_prompt(), self.model.clone());
        if let Some(temperature) = self.temperature {
            params = params.with_temperature(temperature);
        }
        self.backend.chat_complete(params).await
    }

    /// Send `prompt` to the model and return only the reply text.
    pub async fn invoke(&self, prompt: impl IntoPrompt<Message = GenericMessage>) -> Result<String> {
        Ok(self.complete(prompt).await?.into_text())
    }
}

impl<B: ChatCompletionProvider + 'static> ChatCompletionProvider for ThyBotClient<B> {
    type Message = B::Message;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let backend = Arc::clone(&self.backend);
        Box::pin(async move { backend.chat_complete(params).await })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::generic::GenericRole;

    /// Echoes the number of received messages and remembers the last request.
    #[derive(Default)]
    struct CountingBackend {
        seen: Mutex<Vec<GenericMessage>>,
    }

    impl ChatCompletionProvider for CountingBackend {
        type Message = GenericMessage;

        fn chat_complete<'p, M>(
            &self,
            params: ChatCompleteParameters<M>,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>,
        >
        where
            M: Into<Self::Message> + Clone + Send + Sync + 'p,
        {
            let messages: Vec<GenericMessage> =
                params.into_messages().into_iter().map(Into::into).collect();
            let reply = format!("{} message(s)", messages.len());
            *self.seen.lock().unwrap() = messages;
            Box::pin(async move {
                Ok(GenericChatCompletionResponse {
                    message: GenericMessage::assistant(reply),
                    usage: None,
                })
            })
        }
    }

    #[tokio::test]
    async fn invoke_accepts_a_plain_string() {
        let client = ThyBotClient::new(CountingBackend::default(), Model::default());
        let reply = client.invoke("hello").await.unwrap();
        assert_eq!(reply, "1 message(s)");

        let seen = client.backend().seen.lock().unwrap().clone();
        assert_eq!(seen[0].role, GenericRole::User);
        assert_eq!(seen[0].content, "hello");
    }

    #[tokio::test]
    async fn invoke_accepts_a_message_list() {
        let client = ThyBotClient::new(CountingBackend::default(), Model::default());
        let reply = client
            .invoke(vec![
                GenericMessage::system("be brief"),
                GenericMessage::user("hi"),
            ])
            .await
            .unwrap();
        assert_eq!(reply, "2 message(s)");
    }
}
