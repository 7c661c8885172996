//! Provider-agnostic building blocks shared by every ThyBot crate.
//!
//! * [`generic`] – chat messages, roles and the normalised completion response.
//! * [`model`] – model identifiers that back-ends translate to wire names.
//! * [`provider`] – the three seams to the outside world: chat completion,
//!   embeddings and web search.
//! * [`template`] – [`template::IntoPrompt`], the conversion every prompt
//!   fragment implements.
//! * [`ThyBotClient`] – the uniform `invoke(messages) -> text` contract used
//!   by the flows.
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;

pub use client::ThyBotClient;
