mod chat_completion;
mod common;
mod embeddings;

pub use chat_completion::*;
pub use common::Usage;
pub use embeddings::*;
