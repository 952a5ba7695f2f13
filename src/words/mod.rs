//! Word counting for threshold decisions.
//!
//! - [`WordCounter`] - Counts word-like tokens in a span of text
//! - [`UnicodeWords`] - Default counter using UAX #29 word boundaries

use unicode_segmentation::UnicodeSegmentation;

/// Counts word-like tokens in a span of text.
///
/// Implementations must be pure: the same span always yields the same count.
/// Any `Fn(&str) -> usize` closure is a `WordCounter`, which makes it easy to
/// plug in a language-specific tokenizer.
///
/// # Example
///
/// ```
/// use speakchunk::{ChunkConfig, Chunker};
///
/// // Count whitespace-separated tokens instead of UAX #29 words.
/// let chunker = Chunker::new(ChunkConfig::default())
///     .with_word_counter(|span: &str| span.split_whitespace().count());
/// let chunks = chunker.chunk_text("one two");
/// assert_eq!(chunks[0].words, 2);
/// ```
pub trait WordCounter {
    /// Returns the number of word-like tokens in `text`.
    fn count_words(&self, text: &str) -> usize;
}

/// Locale-neutral word counter based on Unicode word boundaries.
///
/// Counts the word segments of UAX #29 that contain at least one
/// alphanumeric character; whitespace and punctuation segments are ignored.
///
/// UAX #29 has no dictionary, so Chinese and Japanese text counts one word
/// per ideograph or kana: `"你好世界"` is 4 words, where a dictionary
/// segmenter sees 2. CJK input therefore reaches `maximum_words` sooner
/// than word-based languages. Raise the thresholds for such input, or plug
/// a dictionary segmenter in with
/// [`Chunker::with_word_counter`](crate::Chunker::with_word_counter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeWords;

impl WordCounter for UnicodeWords {
    fn count_words(&self, text: &str) -> usize {
        text.unicode_words().count()
    }
}

impl<F> WordCounter for F
where
    F: Fn(&str) -> usize,
{
    fn count_words(&self, text: &str) -> usize {
        self(text)
    }
}
