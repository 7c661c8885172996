pub mod reply;

pub use reply::{AssistantReply, ChatTurn, NEED_WEB_SENTINEL, ReplyStatus, TurnSource};
