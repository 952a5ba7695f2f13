//! Grapheme cluster sources.
//!
//! The accumulator consumes extended grapheme clusters one at a time. This
//! module provides the pull-based sources it reads from:
//!
//! - [`GraphemeSource`] - Trait for anything that yields clusters on request
//! - [`StrGraphemes`] - Clusters of an in-memory string
//! - [`ReadGraphemes`] - Clusters decoded from a UTF-8 [`std::io::Read`] stream

mod decode;
mod reader;

use unicode_segmentation::{Graphemes, UnicodeSegmentation};

use crate::error::ChunkError;

pub(crate) use decode::Utf8Graphemes;
pub use reader::ReadGraphemes;

/// A pull-based source of extended grapheme clusters.
///
/// Each call yields the next cluster, an error, or `None` once the source is
/// exhausted. After yielding an error the source is not polled again.
///
/// # Example
///
/// ```
/// use speakchunk::{ChunkConfig, ChunkError, Chunker, GraphemeSource};
///
/// /// Replays pre-segmented clusters.
/// struct Replay(std::vec::IntoIter<String>);
///
/// impl GraphemeSource for Replay {
///     fn next_grapheme(&mut self) -> Option<Result<String, ChunkError>> {
///         self.0.next().map(Ok)
///     }
/// }
///
/// let clusters: Vec<String> = ["h", "i", "!"].iter().map(|s| s.to_string()).collect();
/// let chunker = Chunker::new(ChunkConfig::default());
/// let chunks = chunker
///     .chunk_graphemes(Replay(clusters.into_iter()))
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(chunks[0].text, "hi!");
/// # Ok::<(), ChunkError>(())
/// ```
pub trait GraphemeSource {
    /// Pulls the next grapheme cluster.
    fn next_grapheme(&mut self) -> Option<Result<String, ChunkError>>;
}

impl<S: GraphemeSource + ?Sized> GraphemeSource for &mut S {
    fn next_grapheme(&mut self) -> Option<Result<String, ChunkError>> {
        (**self).next_grapheme()
    }
}

/// Grapheme clusters of an in-memory string. Never fails.
#[derive(Debug, Clone)]
pub struct StrGraphemes<'a> {
    inner: Graphemes<'a>,
}

impl<'a> StrGraphemes<'a> {
    /// Creates a source over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.graphemes(true),
        }
    }
}

impl GraphemeSource for StrGraphemes<'_> {
    fn next_grapheme(&mut self) -> Option<Result<String, ChunkError>> {
        self.inner.next().map(|g| Ok(g.to_owned()))
    }
}
