//! The Chunk type - a speakable piece of text.

use std::fmt;

use super::ChunkReason;

/// A speakable chunk of text with metadata.
///
/// `text` is trimmed of leading and trailing whitespace. `words` is the
/// number of word-like tokens counted into the chunk, which can differ from
/// what a fresh count of `text` gives (spans are counted separately, and an
/// emphasis mark may be appended at a limit split).
///
/// # Example
///
/// ```
/// use speakchunk::{Chunk, ChunkReason};
///
/// let chunk = Chunk::new("Hello there.", 2, ChunkReason::HardBreak);
///
/// assert_eq!(chunk.as_str(), "Hello there.");
/// assert_eq!(chunk.to_string(), "Hello there.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// The text to synthesize.
    pub text: String,

    /// Number of word-like tokens counted into this chunk.
    pub words: usize,

    /// Why the chunk was emitted.
    pub reason: ChunkReason,
}

impl Chunk {
    /// Creates a new chunk.
    pub fn new(text: impl Into<String>, words: usize, reason: ChunkReason) -> Self {
        Self {
            text: text.into(),
            words,
            reason,
        }
    }

    /// Returns the chunk text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if the chunk carries no text.
    ///
    /// A whitespace-only tail of the input is still flushed, as an empty
    /// chunk. Consumers that synthesize audio usually skip those.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consumes the chunk and returns its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
