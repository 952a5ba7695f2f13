//! Chunk emission reasons.

use std::fmt;

/// Why the accumulator emitted a chunk.
///
/// Each reason has a stable lowercase label (`boost`, `limit`, `hard`,
/// `flush`) used by [`Display`](fmt::Display) and by serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChunkReason {
    /// Emitted early at any breakpoint while the boost budget lasts.
    #[cfg_attr(feature = "serde", serde(rename = "boost"))]
    Boost,
    /// Emitted because the word-count ceiling was reached.
    #[cfg_attr(feature = "serde", serde(rename = "limit"))]
    LimitReached,
    /// Emitted at a sentence terminator or line break.
    #[cfg_attr(feature = "serde", serde(rename = "hard"))]
    HardBreak,
    /// Remaining text emitted when the input ended.
    #[cfg_attr(feature = "serde", serde(rename = "flush"))]
    Flush,
}

impl ChunkReason {
    /// Returns the stable label of this reason.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ChunkReason::Boost => "boost",
            ChunkReason::LimitReached => "limit",
            ChunkReason::HardBreak => "hard",
            ChunkReason::Flush => "flush",
        }
    }
}

impl fmt::Display for ChunkReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
