use std::{future::Future, pin::Pin};

use crate::error::Result;

/// Turns text into dense vectors.
///
/// Implement this to plug in a remote embedding service or a local model.
/// Every returned vector must have the same length for a given provider.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed all `texts` in one call, preserving their order.
    fn embed<'a>(
        &'a self,
        texts: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Vec<f32>>>> + Send + 'a>>;

    /// Embed a single query string.
    fn embed_query<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>>> + Send + 'a>> {
        Box::pin(async move {
            let texts = [text.to_owned()];
            let mut vectors = self.embed(&texts).await?;
            vectors.pop().ok_or_else(|| {
                crate::error::ThyBotError::Invalid("embedding provider returned no vector".into())
            })
        })
    }
}
