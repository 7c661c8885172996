//! Recursive character splitter.
//!
//! Text is cut at the coarsest separator that occurs in it (paragraph break,
//! then line break, then space, then between characters). Pieces are merged
//! back into windows of at most `chunk_size` characters, and each new window
//! starts with up to `chunk_overlap` characters carried over from the end of
//! the previous one. Pieces that are still too long are split again with the
//! next finer separator.
//!
//! Lengths are counted in `char`s, not bytes.

use std::collections::VecDeque;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

const SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitterConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    config: SplitterConfig,
}

impl RecursiveSplitter {
    pub fn new(config: SplitterConfig) -> Self {
        Self { config }
    }

    /// Split `text` into trimmed, non-empty windows.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split_with(text, &SEPARATORS)
    }

    fn split_with(&self, text: &str, separators: &[&str]) -> Vec<String> {
        let mut separator = separators.last().copied().unwrap_or("");
        let mut finer: &[&str] = &[];
        for (i, candidate) in separators.iter().enumerate() {
            if candidate.is_empty() {
                separator = candidate;
                break;
            }
            if text.contains(candidate) {
                separator = candidate;
                finer = &separators[i + 1..];
                break;
            }
        }

        let pieces: Vec<&str> = if separator.is_empty() {
            text.char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect()
        } else {
            text.split(separator).filter(|p| !p.is_empty()).collect()
        };

        let mut chunks = Vec::new();
        let mut fitting: Vec<&str> = Vec::new();
        for piece in pieces {
            if char_len(piece) < self.config.chunk_size {
                fitting.push(piece);
                continue;
            }
            if !fitting.is_empty() {
                chunks.extend(self.merge(&fitting, separator));
                fitting.clear();
            }
            if finer.is_empty() {
                chunks.push(piece.trim().to_owned());
            } else {
                chunks.extend(self.split_with(piece, finer));
            }
        }
        if !fitting.is_empty() {
            chunks.extend(self.merge(&fitting, separator));
        }

        chunks.retain(|c| !c.is_empty());
        chunks
    }

    /// Greedily join `pieces` into windows, keeping an overlapping tail.
    fn merge(&self, pieces: &[&str], separator: &str) -> Vec<String> {
        let SplitterConfig {
            chunk_size,
            chunk_overlap,
        } = self.config;
        let sep_len = char_len(separator);

        let mut out = Vec::new();
        let mut window: VecDeque<&str> = VecDeque::new();
        let mut total = 0usize;

        for &piece in pieces {
            let len = char_len(piece);

            if total + len + joint(&window, sep_len) > chunk_size && !window.is_empty() {
                push_joined(&mut out, &window, separator);

                while total > chunk_overlap
                    || (total > 0 && total + len + joint(&window, sep_len) > chunk_size)
                {
                    let Some(front) = window.pop_front() else {
                        break;
                    };
                    total -= char_len(front) + joint(&window, sep_len);
                }
            }

            total += len + joint(&window, sep_len);
            window.push_back(piece);
        }

        push_joined(&mut out, &window, separator);
        out
    }
}

fn push_joined(out: &mut Vec<String>, window: &VecDeque<&str>, separator: &str) {
    let joined = window
        .iter()
        .copied()
        .collect::<Vec<_>>()
        .join(separator);
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_owned());
    }
}

/// Separator length paid when one more piece joins `window`.
fn joint(window: &VecDeque<&str>, sep_len: usize) -> usize {
    if window.is_empty() { 0 } else { sep_len }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter(chunk_size: usize, chunk_overlap: usize) -> RecursiveSplitter {
        RecursiveSplitter::new(SplitterConfig {
            chunk_size,
            chunk_overlap,
        })
    }

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(
            splitter(1000, 200).split_text("TSH is made by the pituitary."),
            vec!["TSH is made by the pituitary."]
        );
    }

    #[test]
    fn windows_overlap_at_word_boundaries() {
        let chunks = splitter(20, 5).split_text("aaaa bbbb cccc dddd eeee ffff");
        assert_eq!(chunks, vec!["aaaa bbbb cccc dddd", "dddd eeee ffff"]);
    }

    #[test]
    fn paragraphs_are_preferred_split_points() {
        let chunks = splitter(12, 0).split_text("para one.\n\npara two.");
        assert_eq!(chunks, vec!["para one.", "para two."]);
    }

    #[test]
    fn unbroken_text_falls_back_to_characters() {
        let chunks = splitter(4, 1).split_text("abcdefghij");
        assert!(chunks.iter().all(|c| c.chars().count() <= 4));
        assert_eq!(chunks.first().map(String::as_str), Some("abcd"));
        assert_eq!(chunks.get(1).map(String::as_str), Some("defg"));
    }

    #[test]
    fn no_chunk_exceeds_the_window() {
        let text = "Levothyroxine is a synthetic form of thyroxine. ".repeat(80);
        let chunks = splitter(500, 50).split_text(&text);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= 500));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let chunks = splitter(11, 0).split_text("ééééé ééééé");
        assert_eq!(chunks, vec!["ééééé ééééé"]);
    }
}
