use std::{future::Future, pin::Pin};

use thybot_core::{error::Result, provider::EmbeddingProvider};

pub const DEFAULT_DIMENSIONS: usize = 384;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Offline embedder used when no embedding service is configured.
///
/// Every lowercase alphanumeric token is hashed into one of `dimensions`
/// buckets with a hash-derived sign; the resulting vector is L2-normalised.
/// Retrieval quality is that of a bag-of-words model, but the output is
/// deterministic and needs no network.
#[derive(Debug, Clone, Copy)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];
        let lowered = text.to_lowercase();
        for token in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let hash = fnv1a(token.as_bytes());
            let bucket = (hash % self.dimensions as u64) as usize;
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME)
    })
}

impl EmbeddingProvider for HashingEmbedder {
    fn embed<'a>(
        &'a self,
        texts: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Vec<f32>>>> + Send + 'a>> {
        Box::pin(async move { Ok(texts.iter().map(|t| self.embed_text(t)).collect()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::cosine_similarity;

    #[test]
    fn vectors_are_normalised_and_stable() {
        let embedder = HashingEmbedder::default();
        let a = embedder.embed_text("Iodine deficiency causes goitre");
        let b = embedder.embed_text("iodine DEFICIENCY causes goitre!");
        assert_eq!(a.len(), DEFAULT_DIMENSIONS);
        assert_eq!(a, b);
        let norm = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn empty_text_is_the_zero_vector() {
        let v = HashingEmbedder::new(8).embed_text("  ...  ");
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn shared_words_score_higher() {
        let embedder = HashingEmbedder::default();
        let query = embedder.embed_text("selenium and thyroid");
        let close = embedder.embed_text("selenium supports the thyroid");
        let far = embedder.embed_text("walking improves mood");
        assert!(cosine_similarity(&query, &close) > cosine_similarity(&query, &far));
    }

    #[tokio::test]
    async fn embeds_in_input_order() {
        let embedder = HashingEmbedder::new(16);
        let texts = vec!["one".to_string(), "two".to_string()];
        let vectors = embedder.embed(&texts).await.unwrap();
        assert_eq!(vectors[0], embedder.embed_text("one"));
        assert_eq!(vectors[1], embedder.embed_text("two"));
    }
}
