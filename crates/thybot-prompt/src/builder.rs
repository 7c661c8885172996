//! Builder‐style helper for constructing **markdown prompts**.
//!
//! ThyBot's prompts mix instructions, patient facts, retrieved document
//! context and search snippets. Writing those as inline `format!` strings gets
//! unreadable fast, so `PromptBuilder` offers a fluent API. Every method
//! returns `self`:
//!
//! ```rust
//! use thybot_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_line("You are ThyBot.")
//!     .add_key_value("Thyroid status", "Normal")
//!     .add_blank_line()
//!     .add_bullet("Answer briefly.")
//!     .finalize();
//!
//! assert_eq!(md, "You are ThyBot.\n**Thyroid status**: Normal\n\n- Answer briefly.\n");
//! ```
//!
//! The builder performs **no validation** and no smart formatting: newlines
//! and whitespace are emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce markdown prompt text.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Call [`Self::finalize`] to obtain the assembled text.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section_h2(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "## {line}").expect("failed to write buffer");
        self
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a line only when `line` is `Some`.
    pub fn add_line_opt(self, line: Option<impl Display>) -> Self {
        match line {
            Some(line) => self.add_line(line),
            None => self,
        }
    }

    /// Add a key–value pair with a **bold** key: `**Key**: Value`
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "**{key}**: {value}").expect("failed to write buffer");
        self
    }

    /// Add a `- item` bullet.
    pub fn add_bullet(mut self, item: impl Display) -> Self {
        writeln!(self.buffer, "- {item}").expect("failed to write buffer");
        self
    }

    /// Add one `n. item` line per element, numbered from 1.
    pub fn add_numbered<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        for (i, item) in items.into_iter().enumerate() {
            writeln!(self.buffer, "{}. {item}", i + 1).expect("failed to write buffer");
        }
        self
    }

    /// Add a titled block fenced by `---` lines:
    ///
    /// ```text
    /// CONTEXT:
    /// ---
    /// <content>
    /// ```
    ///
    /// Used for retrieved document context so the model can tell it apart from
    /// the instructions above it.
    pub fn add_fenced_block(self, title: impl Display, content: impl Display) -> Self {
        self.add_line(format_args!("{title}:"))
            .add_delimiter()
            .add_line(content)
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Insert a "---" delimiter.
    pub fn add_delimiter(self) -> Self {
        self.add_line("---")
    }

    /// Retrieve the accumulated text and consume the builder.
    ///
    /// Trailing newlines are kept; use [`Self::finalize_trimmed`] when the text
    /// is embedded in a single message.
    pub fn finalize(self) -> String {
        self.buffer
    }

    /// Like [`Self::finalize`] but without trailing whitespace.
    pub fn finalize_trimmed(self) -> String {
        let mut buffer = self.buffer;
        buffer.truncate(buffer.trim_end().len());
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_items_start_at_one() {
        let text = PromptBuilder::new()
            .add_numbered(["first", "second"])
            .finalize();
        assert_eq!(text, "1. first\n2. second\n");
    }

    #[test]
    fn fenced_block_separates_context() {
        let text = PromptBuilder::new()
            .add_fenced_block("CONTEXT", "chunk one\n\nchunk two")
            .finalize_trimmed();
        assert_eq!(text, "CONTEXT:\n---\nchunk one\n\nchunk two");
    }

    #[test]
    fn optional_lines_are_skipped() {
        let text = PromptBuilder::new()
            .add_line_opt(None::<&str>)
            .add_line_opt(Some("kept"))
            .finalize();
        assert_eq!(text, "kept\n");
    }
}
