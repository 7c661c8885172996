use std::{future::Future, pin::Pin, sync::Arc};

use thybot_core::{error::Result, provider::EmbeddingProvider};

use crate::{EmbeddingsAdapter, api_v1::EmbeddingRequest, error::GroqError};

impl EmbeddingProvider for EmbeddingsAdapter {
    fn embed<'a>(
        &'a self,
        texts: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Vec<f32>>>> + Send + 'a>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            if texts.is_empty() {
                return Ok(Vec::new());
            }

            let request = EmbeddingRequest::new(self.model.clone(), texts.to_vec());
            let vectors = client.embeddings(request).await?.into_vectors();

            if vectors.len() != texts.len() {
                return Err(GroqError::Format(format!(
                    "expected {} embeddings, got {}",
                    texts.len(),
                    vectors.len()
                ))
                .into());
            }

            Ok(vectors)
        })
    }
}
