use std::{future::Future, pin::Pin};

use crate::{error::Result, generic::GenericChatCompletionResponse, model::Model};

/// A **backend** turns a chat prompt into a network call to a concrete provider
/// (Groq, any OpenAI-compatible server, …) and normalises the reply.
///
/// The trait is intentionally minimal:
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One async-ish method** – `chat_complete`, which performs a *single*
///   non-streaming round-trip. There is no retry loop behind it.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay free of
/// `async_trait`.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M: Clone> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl<M: Clone> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn messages(&self) -> &Vec<M> {
        &self.messages
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}
