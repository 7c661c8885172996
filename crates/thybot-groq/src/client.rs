use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse, EmbeddingRequest, EmbeddingResponse},
    error::GroqError,
};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Upper bound for one request. There is no retry: a request that runs into
/// the timeout fails and the caller decides what to show.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal HTTP client for OpenAI-compatible endpoints.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `GroqClient` is cheap.
#[derive(Clone)]
pub struct GroqClient {
    api_key: Option<String>,
    http: HttpClient,
    base: String,
}

impl GroqClient {
    /// Build a client with a default `reqwest` client: 30 s timeout, Rustls TLS.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Result<Self, GroqError> {
        let http = HttpClient::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self::with_http(api_key, http, base_url))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(api_key: Option<String>, http: HttpClient, base_url: Option<String>) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Self {
            api_key,
            http,
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GroqError> {
        self.post_json("chat/completions", &request).await
    }

    /// Embed a batch of texts.
    pub async fn embeddings(
        &self,
        request: EmbeddingRequest,
    ) -> Result<EmbeddingResponse, GroqError> {
        self.post_json("embeddings", &request).await
    }

    fn headers(&self) -> Result<HeaderMap, GroqError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &self.api_key {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {api_key}"))?,
            );
        }
        Ok(headers)
    }

    async fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, GroqError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "sending request");

        let resp = self
            .http
            .post(url)
            .headers(self.headers()?)
            .json(request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(%status, "provider returned an error status");

            return Err(GroqError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: Resp = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = GroqClient::with_http(
            None,
            HttpClient::new(),
            Some("http://localhost:11434/v1/".into()),
        );
        assert_eq!(client.base_url(), "http://localhost:11434/v1");
    }

    #[test]
    fn authorization_header_only_with_key() {
        let anonymous = GroqClient::with_http(None, HttpClient::new(), None);
        assert!(anonymous.headers().unwrap().get(AUTHORIZATION).is_none());

        let keyed = GroqClient::with_http(Some("gsk_test".into()), HttpClient::new(), None);
        assert_eq!(
            keyed.headers().unwrap().get(AUTHORIZATION).unwrap(),
            "Bearer gsk_test"
        );
    }
}
