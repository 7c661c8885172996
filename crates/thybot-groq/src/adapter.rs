use std::{env, sync::Arc};

use thybot_core::error::{Result, ThyBotError};

use crate::client::GroqClient;

/// Thin wrapper that wires the HTTP client [`GroqClient`] into a value that
/// implements [`thybot_core::provider::ChatCompletionProvider`].
///
/// All user-facing functionality sits on the generic
/// [`thybot_core::ThyBotClient`] once the adapter is plugged in.
pub struct GroqAdapter {
    pub(crate) client: Arc<GroqClient>,
}

/// Builder for [`GroqAdapter`].
///
/// ```rust,no_run
/// use thybot_groq::GroqAdapterBuilder;
///
/// let backend = GroqAdapterBuilder::new_from_env()
///     .build()
///     .expect("GROQ_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct GroqAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl GroqAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `GROQ_API_KEY` and the optional `GROQ_BASE_URL` from the
    /// environment. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("GROQ_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            base_url: env::var("GROQ_BASE_URL").ok().filter(|u| !u.trim().is_empty()),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`ThyBotError::Invalid`] – if the API key is missing.
    /// * [`ThyBotError::Backend`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<GroqAdapter> {
        let api_key = self.api_key.ok_or(ThyBotError::Invalid(
            "missing env variable: `GROQ_API_KEY`".into(),
        ))?;

        let client = GroqClient::new(Some(api_key), self.base_url)?;

        Ok(GroqAdapter {
            client: Arc::new(client),
        })
    }
}

/// Default model for [`EmbeddingsAdapter`]: all-MiniLM-L6-v2 as published by
/// Ollama.
pub const DEFAULT_EMBEDDING_MODEL: &str = "all-minilm";

/// Embedding backend speaking the OpenAI `/embeddings` protocol.
pub struct EmbeddingsAdapter {
    pub(crate) client: Arc<GroqClient>,
    pub(crate) model: String,
}

impl EmbeddingsAdapter {
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Builder for [`EmbeddingsAdapter`].
#[derive(Default)]
pub struct EmbeddingsAdapterBuilder {
    pub(crate) base_url: Option<String>,
    pub(crate) model: Option<String>,
    pub(crate) api_key: Option<String>,
}

impl EmbeddingsAdapterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `THYBOT_EMBEDDINGS_URL`, `THYBOT_EMBEDDINGS_MODEL` and
    /// `THYBOT_EMBEDDINGS_API_KEY`.
    pub fn new_from_env() -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            base_url: var("THYBOT_EMBEDDINGS_URL"),
            model: var("THYBOT_EMBEDDINGS_MODEL"),
            api_key: var("THYBOT_EMBEDDINGS_API_KEY"),
        }
    }

    /// `true` when a base URL has been supplied.
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// # Errors
    ///
    /// * [`ThyBotError::Invalid`] – if no base URL was supplied.
    pub fn build(self) -> Result<EmbeddingsAdapter> {
        let base_url = self.base_url.ok_or(ThyBotError::Invalid(
            "missing env variable: `THYBOT_EMBEDDINGS_URL`".into(),
        ))?;

        let client = GroqClient::new(self.api_key, Some(base_url))?;

        Ok(EmbeddingsAdapter {
            client: Arc::new(client),
            model: self
                .model
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_adapter_requires_a_key() {
        let err = GroqAdapterBuilder::new().build().err().unwrap();
        assert!(matches!(err, ThyBotError::Invalid(_)));
        assert!(GroqAdapterBuilder::new().with_api_key("gsk_test").build().is_ok());
    }

    #[test]
    fn embeddings_adapter_defaults_the_model() {
        let adapter = EmbeddingsAdapterBuilder::new()
            .with_base_url("http://localhost:11434/v1")
            .build()
            .unwrap();
        assert_eq!(adapter.model(), DEFAULT_EMBEDDING_MODEL);
        assert!(EmbeddingsAdapterBuilder::new().build().is_err());
    }
}
