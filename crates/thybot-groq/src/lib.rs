//! HTTP adapter for Groq's OpenAI-compatible API.
//!
//! * [`GroqAdapter`] implements [`thybot_core::provider::ChatCompletionProvider`]
//!   on top of `POST {base}/chat/completions`.
//! * [`EmbeddingsAdapter`] implements [`thybot_core::provider::EmbeddingProvider`]
//!   on top of `POST {base}/embeddings`. Groq itself serves no embedding
//!   models, so this one is usually pointed at another OpenAI-compatible
//!   server (Ollama, OpenAI, a local gateway).
mod adapter;
mod model_map;
mod provider_impl_chat;
mod provider_impl_embed;

pub use adapter::{EmbeddingsAdapter, EmbeddingsAdapterBuilder, GroqAdapter, GroqAdapterBuilder};
pub use client::GroqClient;
pub mod api_v1;
mod client;
pub mod error;
