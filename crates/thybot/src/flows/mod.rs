//! The ThyBot interactions.
//!
//! Every flow that talks to the model or the search engine returns a
//! [`ChatTurn`](thybot_types::outputs::ChatTurn) even when one of those calls
//! fails: the failure is described in the turn's text and the turn is marked
//! with [`TurnSource::Error`](thybot_types::outputs::TurnSource::Error).
//! `Err` is reserved for input ThyBot cannot use and missing preconditions.
pub mod document_chat;
pub mod general_chat;
pub mod meal;
pub mod search_summary;

pub use document_chat::DocumentChat;
pub use general_chat::{GeneralChatOptions, answer_general_question};
pub use meal::{MealItemAnalysis, MealPlan, analyze_meal};
pub use search_summary::{NO_SOURCES_MESSAGE, summarize_search_for_thyroid};

use thybot_types::outputs::{ChatTurn, TurnSource};

fn error_turn(what: &str, err: impl std::fmt::Display) -> ChatTurn {
    ChatTurn::new(TurnSource::Error, format!("⚠️ {what}: {err}"))
}
