//! Prompt composition helpers: a markdown [`builder::PromptBuilder`] and a
//! [`chain::PromptChain`] that lines up prompt fragments into one message list.
pub mod builder;
pub mod chain;
