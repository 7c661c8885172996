//! Prompt fragments: small values that turn ThyBot state into chat messages.
//!
//! Each fragment implements [`thybot_core::template::IntoPrompt`] so it can be
//! lined up in a [`thybot_prompt::chain::PromptChain`].
mod document_context;
mod history;
mod meal;
mod persona;
mod search_results;

pub use document_context::DocumentContextFragment;
pub use history::HistoryFragment;
pub use meal::MealItemFragment;
pub use persona::ThyroidAssistantFragment;
pub use search_results::SearchResultsFragment;
