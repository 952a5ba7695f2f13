//! Core chunking engine - the Accumulator state machine.
//!
//! This module implements the push-style engine that turns grapheme clusters
//! into speakable chunks:
//!
//! - [`Accumulator`] - Stateful engine, one cluster at a time
//! - `push()` - Feed the next piece of text, of any length
//! - `finish()` - Flush remaining text when the input ends
//!
//! # Example
//!
//! ```
//! use speakchunk::{Accumulator, ChunkConfig, ChunkReason};
//!
//! let mut acc = Accumulator::new(ChunkConfig::default());
//! let mut chunks = Vec::new();
//!
//! for piece in ["Hel", "lo, wo", "rld"] {
//!     chunks.extend(acc.push(piece));
//! }
//! chunks.extend(acc.finish());
//!
//! assert_eq!(chunks[0].text, "Hello,");
//! assert_eq!(chunks[0].reason, ChunkReason::Boost);
//! assert_eq!(chunks[1].text, "world");
//! assert_eq!(chunks[1].reason, ChunkReason::Flush);
//! ```

use tracing::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

use crate::chunk::{Chunk, ChunkReason};
use crate::classify::{Breakpoint, GraphemeClass, is_decimal_separator};
use crate::config::{ChunkConfig, ClusterPolicy};
use crate::words::{UnicodeWords, WordCounter};

/// The chunk accumulator.
///
/// `Accumulator` holds a two-level buffer: the pending span (text since the
/// last breakpoint) and the committed body (spans already folded into the
/// chunk in progress, with their word count). At each breakpoint it commits
/// the pending span and decides whether to emit:
///
/// - Hard breaks (`.`, `?`, `!`, `。`, newline, ...) always emit.
/// - While fewer than `boost` chunks have been emitted, every breakpoint emits.
/// - Past the boost budget, soft breaks (`,`, `:`, `、`, ...) emit only once
///   the chunk holds more than `maximum_words` words.
/// - Before committing, a chunk already holding more than `minimum_words`
///   words is emitted on its own if the new span would push it past
///   `maximum_words`.
///
/// A `.` or `,` between two ASCII digits is dropped instead of splitting,
/// so `3.14` and `1,000` stay in one piece (as `314` and `1000`). Deciding
/// this needs the cluster after the separator; the accumulator holds the
/// separator until that cluster arrives.
///
/// Pieces passed to [`push()`](Accumulator::push) are split into grapheme
/// clusters. The last cluster of a piece is kept back until more text
/// arrives, since the next piece may still extend it (a combining mark, a
/// `\n` after `\r`). Any split of the input gives the same chunks.
///
/// # Reuse
///
/// [`finish()`](Accumulator::finish) resets the run state, after which the
/// accumulator can process a new input.
#[derive(Debug, Clone)]
pub struct Accumulator<W = UnicodeWords> {
    config: ChunkConfig,
    counter: W,
    /// Text since the last breakpoint.
    pending: String,
    /// Text committed to the chunk in progress.
    body: String,
    /// Word count of `body`.
    body_words: usize,
    /// Chunks emitted in this run.
    emitted: usize,
    previous_digit: bool,
    /// `.` or `,` seen right after a digit, awaiting the next cluster.
    held_separator: Option<(char, Breakpoint)>,
    /// Pushed text whose last cluster may still grow.
    unsegmented: String,
}

impl Accumulator {
    /// Creates a new accumulator counting words with [`UnicodeWords`].
    pub fn new(config: ChunkConfig) -> Self {
        Self::with_word_counter(config, UnicodeWords)
    }
}

impl<W: WordCounter> Accumulator<W> {
    /// Creates a new accumulator with a custom word counter.
    pub fn with_word_counter(config: ChunkConfig, counter: W) -> Self {
        Self {
            config,
            counter,
            pending: String::new(),
            body: String::new(),
            body_words: 0,
            emitted: 0,
            previous_digit: false,
            held_separator: None,
            unsegmented: String::new(),
        }
    }

    /// Pushes the next piece of text and returns any chunks it completes.
    ///
    /// `text` may be a single character, a token from a language model, or a
    /// whole document. Its last grapheme cluster is held until the next
    /// push or [`finish()`](Self::finish).
    ///
    /// # Example
    ///
    /// ```
    /// use speakchunk::{Accumulator, ChunkConfig};
    ///
    /// let mut acc = Accumulator::new(ChunkConfig::default());
    /// assert!(acc.push("Stop").is_empty());
    /// // The `!` could still be followed by a combining mark.
    /// assert!(acc.push("!").is_empty());
    /// assert_eq!(acc.push(" Go")[0].text, "Stop!");
    /// ```
    pub fn push(&mut self, text: &str) -> Vec<Chunk> {
        let mut out = Vec::new();
        self.unsegmented.push_str(text);

        let pushed = std::mem::take(&mut self.unsegmented);
        let mut clusters = pushed.graphemes(true).peekable();
        while let Some(grapheme) = clusters.next() {
            if clusters.peek().is_none() {
                self.unsegmented.push_str(grapheme);
                break;
            }
            self.push_into(grapheme, &mut out);
        }
        out
    }

    /// Finalizes the run and returns the remaining chunks.
    ///
    /// Any text still buffered is emitted as a single [`ChunkReason::Flush`]
    /// chunk. Nothing is emitted if the buffers are empty.
    pub fn finish(&mut self) -> Vec<Chunk> {
        let mut out = Vec::new();
        let held = std::mem::take(&mut self.unsegmented);
        for grapheme in held.graphemes(true) {
            self.push_into(grapheme, &mut out);
        }
        self.finish_into(&mut out);
        out
    }

    /// Feeds one grapheme cluster, extending `out` in place.
    pub(crate) fn push_into<E: Extend<Chunk>>(&mut self, grapheme: &str, out: &mut E) {
        let class = GraphemeClass::of(grapheme);

        if let Some((separator, kind)) = self.held_separator.take() {
            if class == GraphemeClass::Digit {
                trace!(separator = %separator, "eliding separator between digits");
            } else {
                self.breakpoint(separator, kind, out);
            }
        }

        match class {
            GraphemeClass::Cluster => {
                match self.config.cluster_policy() {
                    ClusterPolicy::Keep => self.pending.push_str(grapheme),
                    ClusterPolicy::Drop => trace!(cluster = grapheme, "dropping cluster"),
                }
                self.previous_digit = false;
            }
            GraphemeClass::Break(c, kind) => {
                if self.previous_digit && is_decimal_separator(c) {
                    self.held_separator = Some((c, kind));
                } else {
                    self.breakpoint(c, kind, out);
                }
            }
            GraphemeClass::Digit => {
                self.pending.push_str(grapheme);
                self.previous_digit = true;
            }
            GraphemeClass::Plain => {
                self.pending.push_str(grapheme);
                self.previous_digit = false;
            }
        }
    }

    /// Ends the run after the last cluster, extending `out` in place.
    pub(crate) fn finish_into<E: Extend<Chunk>>(&mut self, out: &mut E) {
        if let Some((separator, kind)) = self.held_separator.take() {
            self.breakpoint(separator, kind, out);
        }

        if !self.body.is_empty() || !self.pending.is_empty() {
            let words = self.body_words + self.counter.count_words(&self.pending);
            self.body.push_str(&self.pending);
            let text = self.body.trim().to_owned();
            self.body_words = words;
            out.extend(Some(self.emit(text, ChunkReason::Flush)));
        }

        debug!(chunks = self.emitted, "chunking run complete");
        self.reset();
    }

    fn breakpoint<E: Extend<Chunk>>(&mut self, c: char, kind: Breakpoint, out: &mut E) {
        self.previous_digit = false;

        // Nothing to end: leading or repeated punctuation.
        if self.pending.is_empty() {
            return;
        }

        let span_words = self.counter.count_words(&self.pending);
        let minimum = self.config.minimum_words();
        let maximum = self.config.maximum_words();

        if self.body_words > minimum && self.body_words + span_words > maximum {
            let mut text = self.body.trim().to_owned();
            // The mark is also committed with the span below.
            if kind.is_emphasis() {
                text.push(c);
            }
            out.extend(Some(self.emit(text, ChunkReason::LimitReached)));
        }

        self.body.push_str(&self.pending);
        self.body.push(c);
        self.body_words += span_words;
        self.pending.clear();

        let over_limit = self.body_words > maximum;
        if kind.is_hard() || over_limit || self.emitted < self.config.boost() {
            let reason = if kind.is_hard() {
                ChunkReason::HardBreak
            } else if over_limit {
                ChunkReason::LimitReached
            } else {
                ChunkReason::Boost
            };
            let text = self.body.trim().to_owned();
            out.extend(Some(self.emit(text, reason)));
        }
    }

    /// Builds a chunk carrying the committed word count and clears the body.
    fn emit(&mut self, text: String, reason: ChunkReason) -> Chunk {
        let chunk = Chunk {
            text,
            words: self.body_words,
            reason,
        };
        trace!(reason = %chunk.reason, words = chunk.words, "emitting chunk");

        self.body.clear();
        self.body_words = 0;
        self.emitted += 1;
        chunk
    }

    /// Resets the run state for a new input.
    ///
    /// Discards buffered text without emitting it.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.body.clear();
        self.body_words = 0;
        self.emitted = 0;
        self.previous_digit = false;
        self.held_separator = None;
        self.unsegmented.clear();
    }

    /// Returns the number of chunks emitted in the current run.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns the number of bytes buffered and not yet emitted.
    pub fn pending_len(&self) -> usize {
        let held = self.held_separator.map_or(0, |(c, _)| c.len_utf8());
        self.body.len() + self.pending.len() + held + self.unsegmented.len()
    }

    /// Returns the configuration used by this accumulator.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(ChunkConfig::default())
    }
}
