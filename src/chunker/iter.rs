//! Lazy chunking front end - Chunker and ChunkIter.
//!
//! This module implements the synchronous chunking API. It provides two main
//! types:
//!
//! - [`Chunker`] - Holds configuration and word counter, starts chunking runs
//! - [`ChunkIter`] - Iterator that yields chunks from a [`GraphemeSource`]
//!
//! # Example
//!
//! ```no_run
//! use speakchunk::{ChunkConfig, Chunker};
//! use std::fs::File;
//!
//! let file = File::open("story.txt")?;
//! let chunker = Chunker::new(ChunkConfig::default());
//!
//! for chunk in chunker.chunk(file) {
//!     let chunk = chunk?;
//!     println!("[{}] {}", chunk.reason, chunk.text);
//! }
//! # Ok::<(), speakchunk::ChunkError>(())
//! ```

use std::collections::VecDeque;
use std::io::Read;

use unicode_segmentation::UnicodeSegmentation;

use super::Accumulator;
use crate::chunk::Chunk;
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::grapheme::{GraphemeSource, ReadGraphemes, StrGraphemes};
use crate::words::{UnicodeWords, WordCounter};

/// Splits text into speakable chunks.
///
/// `Chunker` is the high-level API. It holds a configuration and a word
/// counter and starts independent chunking runs over various sources. Runs
/// share no state, so one `Chunker` can serve many inputs, also from
/// different threads.
///
/// # Example
///
/// ```
/// use speakchunk::{ChunkConfig, ChunkReason, Chunker};
///
/// let chunker = Chunker::new(ChunkConfig::default());
/// let chunks = chunker.chunk_text("Well, that went fine. See you");
///
/// let texts: Vec<_> = chunks.iter().map(|c| c.as_str()).collect();
/// assert_eq!(texts, ["Well,", "that went fine.", "See you"]);
/// assert_eq!(chunks[2].reason, ChunkReason::Flush);
/// ```
#[derive(Debug, Clone)]
pub struct Chunker<W = UnicodeWords> {
    config: ChunkConfig,
    counter: W,
}

impl Chunker {
    /// Creates a new chunker with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use speakchunk::{ChunkConfig, Chunker};
    ///
    /// let chunker = Chunker::new(ChunkConfig::default());
    /// ```
    pub fn new(config: ChunkConfig) -> Self {
        Self {
            config,
            counter: UnicodeWords,
        }
    }
}

impl<W: WordCounter + Clone> Chunker<W> {
    /// Replaces the word counter used for threshold decisions.
    pub fn with_word_counter<V: WordCounter + Clone>(self, counter: V) -> Chunker<V> {
        Chunker {
            config: self.config,
            counter,
        }
    }

    /// Creates a chunking iterator over a UTF-8 byte reader.
    ///
    /// The iterator reads lazily: bytes are read only when the chunks
    /// available so far have been consumed. Decoding and I/O failures end
    /// the sequence with an error item.
    ///
    /// # Example
    ///
    /// ```
    /// use speakchunk::{ChunkConfig, Chunker};
    /// use std::io::Cursor;
    ///
    /// let chunker = Chunker::new(ChunkConfig::default());
    /// let chunks = chunker
    ///     .chunk(Cursor::new("Ready? Go!"))
    ///     .collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(chunks.len(), 2);
    /// # Ok::<(), speakchunk::ChunkError>(())
    /// ```
    pub fn chunk<R: Read>(&self, reader: R) -> ChunkIter<ReadGraphemes<R>, W> {
        self.chunk_graphemes(ReadGraphemes::new(reader))
    }

    /// Creates a chunking iterator over an in-memory string.
    pub fn chunk_str<'a>(&self, text: &'a str) -> ChunkIter<StrGraphemes<'a>, W> {
        self.chunk_graphemes(StrGraphemes::new(text))
    }

    /// Creates a chunking iterator over any grapheme source.
    pub fn chunk_graphemes<S: GraphemeSource>(&self, source: S) -> ChunkIter<S, W> {
        ChunkIter::new(
            source,
            Accumulator::with_word_counter(self.config, self.counter.clone()),
        )
    }

    /// Chunks an in-memory string eagerly.
    ///
    /// In-memory text cannot fail to decode, so this returns the chunks
    /// directly.
    ///
    /// # Example
    ///
    /// ```
    /// use speakchunk::{ChunkConfig, Chunker};
    ///
    /// let chunker = Chunker::new(ChunkConfig::default());
    /// assert!(chunker.chunk_text("").is_empty());
    /// assert_eq!(chunker.chunk_text("hello world").len(), 1);
    /// ```
    pub fn chunk_text(&self, text: &str) -> Vec<Chunk> {
        let mut accumulator = Accumulator::with_word_counter(self.config, self.counter.clone());
        let mut chunks = Vec::new();
        for grapheme in text.graphemes(true) {
            accumulator.push_into(grapheme, &mut chunks);
        }
        accumulator.finish_into(&mut chunks);
        chunks
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Returns the word counter used by this chunker.
    pub fn word_counter(&self) -> &W {
        &self.counter
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkConfig::default())
    }
}

/// An iterator that yields chunks from a grapheme source.
///
/// `ChunkIter` pulls one cluster at a time and yields chunks as soon as the
/// accumulator completes them. Dropping the iterator, or simply not calling
/// `next()`, stops pulling from the source.
///
/// If the source fails, the error is yielded once and the iterator ends; the
/// partially accumulated chunk is not flushed.
///
/// # Example
///
/// ```
/// use speakchunk::{ChunkConfig, ChunkReason, Chunker};
///
/// let chunker = Chunker::new(ChunkConfig::default());
/// let mut iter = chunker.chunk_str("First. Second. Third.");
///
/// let first = iter.next().unwrap()?;
/// assert_eq!(first.text, "First.");
/// assert_eq!(first.reason, ChunkReason::HardBreak);
/// # Ok::<(), speakchunk::ChunkError>(())
/// ```
#[derive(Debug)]
pub struct ChunkIter<S, W = UnicodeWords> {
    source: S,
    accumulator: Accumulator<W>,
    ready: VecDeque<Chunk>,
    finished: bool,
}

impl<S: GraphemeSource, W: WordCounter> ChunkIter<S, W> {
    fn new(source: S, accumulator: Accumulator<W>) -> Self {
        Self {
            source,
            accumulator,
            ready: VecDeque::new(),
            finished: false,
        }
    }

    /// Consumes the iterator and returns the grapheme source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: GraphemeSource, W: WordCounter> Iterator for ChunkIter<S, W> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chunk) = self.ready.pop_front() {
                return Some(Ok(chunk));
            }
            if self.finished {
                return None;
            }

            match self.source.next_grapheme() {
                Some(Ok(grapheme)) => self.accumulator.push_into(&grapheme, &mut self.ready),
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    self.accumulator.finish_into(&mut self.ready);
                }
            }
        }
    }
}

impl<S: GraphemeSource, W: WordCounter> std::iter::FusedIterator for ChunkIter<S, W> {}
