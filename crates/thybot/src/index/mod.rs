//! In-memory similarity index over the chunks of one document.
//!
//! Built once per upload and dropped with the document conversation. A
//! linear scan is enough for a single document of a few hundred chunks.
mod hashing;

pub use hashing::{DEFAULT_DIMENSIONS, HashingEmbedder};

use std::sync::Arc;

use thybot_core::{
    error::{Result, ThyBotError},
    provider::EmbeddingProvider,
};

use crate::{error::IngestError, ingest::DocumentChunk};

/// A chunk returned by [`VectorIndex::query`] with its cosine score.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedChunk {
    pub chunk: DocumentChunk,
    pub score: f32,
}

pub struct VectorIndex {
    embedder: Arc<dyn EmbeddingProvider>,
    chunks: Vec<DocumentChunk>,
    vectors: Vec<Vec<f32>>,
}

impl std::fmt::Debug for VectorIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorIndex")
            .field("chunks", &self.chunks.len())
            .finish_non_exhaustive()
    }
}

impl VectorIndex {
    /// Embed every chunk with `embedder`. Queries later use the same
    /// embedder so that both sides live in one vector space.
    pub async fn build(
        chunks: Vec<DocumentChunk>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> std::result::Result<Self, IngestError> {
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let vectors = embedder.embed(&texts).await?;
        if vectors.len() != chunks.len() {
            return Err(IngestError::Embedding(ThyBotError::Invalid(format!(
                "expected {} embeddings, got {}",
                chunks.len(),
                vectors.len()
            ))));
        }

        tracing::debug!(chunks = chunks.len(), "vector index built");
        Ok(Self {
            embedder,
            chunks,
            vectors,
        })
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The `k` chunks most similar to `question`, best first.
    pub async fn query(&self, question: &str, k: usize) -> Result<Vec<RetrievedChunk>> {
        let query = self.embedder.embed_query(question).await?;
        Ok(self.nearest(&query, k))
    }

    /// Rank by cosine similarity to `query`. Ties keep document order.
    pub fn nearest(&self, query: &[f32], k: usize) -> Vec<RetrievedChunk> {
        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, cosine_similarity(query, v)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .take(k)
            .map(|(i, score)| RetrievedChunk {
                chunk: self.chunks[i].clone(),
                score,
            })
            .collect()
    }
}

/// Cosine similarity; `0.0` for mismatched lengths or zero vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{SplitterConfig, split_segments, TextSegment};

    fn chunks(texts: &[&str]) -> Vec<DocumentChunk> {
        let segments: Vec<TextSegment> = texts
            .iter()
            .enumerate()
            .map(|(index, text)| TextSegment {
                index,
                text: text.to_string(),
            })
            .collect();
        split_segments("leaflet.txt", &segments, &SplitterConfig::default())
    }

    #[test]
    fn cosine_edge_cases() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 1.0], &[2.0, 2.0]) - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn query_returns_best_matches_first() {
        let index = VectorIndex::build(
            chunks(&[
                "Take levothyroxine on an empty stomach every morning.",
                "Soy and coffee can reduce levothyroxine absorption.",
                "Regular walks help with fatigue.",
            ]),
            Arc::new(HashingEmbedder::default()),
        )
        .await
        .unwrap();

        assert_eq!(index.len(), 3);
        let hits = index.query("does coffee affect levothyroxine absorption", 2).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].chunk.source.chunk_index, 1);
        assert!(hits[0].score >= hits[1].score);
    }

    #[tokio::test]
    async fn k_larger_than_index_returns_everything() {
        let index = VectorIndex::build(chunks(&["only chunk"]), Arc::new(HashingEmbedder::new(32)))
            .await
            .unwrap();
        assert_eq!(index.query("chunk", 10).await.unwrap().len(), 1);
    }
}
