//! # `thybot` – thyroid-health assistant
//!
//! The umbrella crate: it wires the building blocks of the workspace into the
//! ThyBot flows and re-exports them so one dependency line is enough.
//!
//! | Crate              | What it provides                                                        |
//! |--------------------|-------------------------------------------------------------------------|
//! | **`thybot-core`**  | Messages, model ids, errors, provider traits and the `ThyBotClient`     |
//! | **`thybot-prompt`**| `PromptBuilder` and `PromptChain`                                       |
//! | **`thybot-types`** | Patient profile, thyroid classifier, reply types and prompt fragments   |
//! | **`thybot-groq`**  | HTTP adapter for Groq chat completions and `/embeddings` *(optional)*   |
//!
//! On top of those this crate adds
//!
//! * the confidence heuristic that decides when to fall back to the web
//!   ([`confidence`]),
//! * document ingestion and an in-memory vector index ([`ingest`], [`index`]),
//! * DuckDuckGo search ([`search`]) and the nutrition table ([`nutrition`]),
//! * the flows themselves ([`flows`]) and the per-user [`session::Session`],
//! * configuration and logging for the `thybot` binary.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use thybot::{
//!     ThyBotClient, assistant::ThyBot, config::ThyBotConfig, index::HashingEmbedder,
//!     nutrition::NutritionTable, search::DuckDuckGoSearch, session::Session,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ThyBotConfig::from_env()?;
//!     let backend = thybot::groq::GroqAdapterBuilder::new_from_env().build()?;
//!     let bot = ThyBot::new(
//!         ThyBotClient::new(backend, config.model.clone()),
//!         Arc::new(DuckDuckGoSearch::new()?),
//!         Arc::new(HashingEmbedder::default()),
//!         NutritionTable::default(),
//!         config,
//!     );
//!
//!     let mut session = Session::new();
//!     let turn = bot.chat(&mut session, "What does a high TSH mean?").await;
//!     println!("{}", turn.text);
//!     Ok(())
//! }
//! ```
pub mod assistant;
pub mod confidence;
pub mod config;
pub mod conversation;
pub mod error;
pub mod flows;
pub mod index;
pub mod ingest;
pub mod nutrition;
pub mod search;
pub mod session;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;

pub use thybot_core::{ThyBotClient, error::ThyBotError, generic, model, provider, template};
pub use thybot_prompt as prompt;
pub use thybot_types as types;

#[cfg(feature = "groq")]
pub use thybot_groq as groq;
