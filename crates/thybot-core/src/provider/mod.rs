//! Traits at the boundary between ThyBot and the services it consumes.
mod chat_complete;
mod embed;
mod web_search;

pub use chat_complete::*;
pub use embed::*;
pub use web_search::*;
