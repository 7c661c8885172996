//! Uploaded document → text chunks.
//!
//! ```rust
//! use thybot::ingest::{SplitterConfig, chunk_document};
//!
//! let chunks = chunk_document("notes.txt", b"Take levothyroxine before breakfast.",
//!                             &SplitterConfig::default()).unwrap();
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].source.file_name, "notes.txt");
//! ```
mod loader;
mod splitter;

pub use loader::{DocumentKind, TextSegment, load_document};
pub use splitter::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, RecursiveSplitter, SplitterConfig};

use crate::error::IngestError;

/// Where a chunk came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSource {
    pub file_name: String,
    /// Page number for PDFs (0-based), `0` otherwise.
    pub segment: usize,
    /// Position of the chunk across the whole document.
    pub chunk_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentChunk {
    pub text: String,
    pub source: ChunkSource,
}

/// Split already extracted segments. Chunks never span two segments.
pub fn split_segments(
    file_name: &str,
    segments: &[TextSegment],
    config: &SplitterConfig,
) -> Vec<DocumentChunk> {
    let splitter = RecursiveSplitter::new(*config);
    segments
        .iter()
        .flat_map(|segment| {
            splitter
                .split_text(&segment.text)
                .into_iter()
                .map(move |text| (segment.index, text))
        })
        .enumerate()
        .map(|(chunk_index, (segment, text))| DocumentChunk {
            text,
            source: ChunkSource {
                file_name: file_name.to_owned(),
                segment,
                chunk_index,
            },
        })
        .collect()
}

/// Load `bytes` as the file `file_name` and split it into chunks.
pub fn chunk_document(
    file_name: &str,
    bytes: &[u8],
    config: &SplitterConfig,
) -> Result<Vec<DocumentChunk>, IngestError> {
    let segments = load_document(file_name, bytes)?;
    let chunks = split_segments(file_name, &segments, config);
    if chunks.is_empty() {
        return Err(IngestError::EmptyDocument {
            file_name: file_name.to_owned(),
        });
    }
    tracing::info!(file_name, chunks = chunks.len(), "document chunked");
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_are_numbered_across_segments() {
        let segments = vec![
            TextSegment {
                index: 0,
                text: "page one".into(),
            },
            TextSegment {
                index: 2,
                text: "page three".into(),
            },
        ];
        let chunks = split_segments("labs.pdf", &segments, &SplitterConfig::default());
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].text, "page three");
        assert_eq!(chunks[1].source.segment, 2);
        assert_eq!(chunks[1].source.chunk_index, 1);
    }

    #[test]
    fn unsupported_upload_fails_before_splitting() {
        let err = chunk_document("photo.jpg", b"\xff\xd8", &SplitterConfig::default()).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFileType { .. }));
    }
}
