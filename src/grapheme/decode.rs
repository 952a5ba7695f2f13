//! Incremental UTF-8 decoding into grapheme clusters.
//!
//! Bytes arrive in arbitrary pieces: a multi-byte sequence may be split
//! across reads, and so may a grapheme cluster. [`Utf8Graphemes`] keeps the
//! undecoded tail as bytes and the decoded text as a string, and releases a
//! cluster only once the code point after it is known (or input has ended).
//! The resulting clusters are the same as segmenting the whole text at once.

use bytes::BytesMut;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::ChunkError;

/// Consumed prefix length at which decoded text is compacted.
const COMPACT_THRESHOLD: usize = 4 * 1024;

/// Push bytes in, pull grapheme clusters out.
#[derive(Debug, Default)]
pub(crate) struct Utf8Graphemes {
    undecoded: BytesMut,
    text: String,
    cursor: usize,
    decoded: u64,
    closed: bool,
    fault: Option<ChunkError>,
}

impl Utf8Graphemes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends raw bytes.
    ///
    /// The valid prefix is decoded right away. An invalid sequence closes the
    /// decoder: clusters before it are still released, then the error.
    pub(crate) fn feed(&mut self, data: &[u8]) {
        if self.closed {
            return;
        }
        self.undecoded.extend_from_slice(data);

        let valid = match std::str::from_utf8(&self.undecoded) {
            Ok(s) => s.len(),
            Err(e) => {
                if e.error_len().is_some() {
                    let offset = self.decoded + e.valid_up_to() as u64;
                    debug!(offset, "invalid utf-8 in input");
                    self.fault = Some(ChunkError::InvalidUtf8 { offset });
                    self.closed = true;
                }
                e.valid_up_to()
            }
        };

        let head = self.undecoded.split_to(valid);
        // `head` is valid UTF-8, so this borrows without replacement.
        self.text.push_str(&String::from_utf8_lossy(&head));
        self.decoded += valid as u64;
    }

    /// Marks the end of input.
    pub(crate) fn finish(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if !self.undecoded.is_empty() {
            let offset = self.decoded;
            debug!(offset, "input ended inside a utf-8 sequence");
            self.fault = Some(ChunkError::IncompleteUtf8 { offset });
        }
    }

    /// Returns true once no further bytes are accepted.
    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    /// Pulls the next complete grapheme cluster.
    ///
    /// Returns `None` when more bytes are needed, or when the decoder is
    /// closed and fully drained.
    pub(crate) fn next_grapheme(&mut self) -> Option<Result<String, ChunkError>> {
        let rest = &self.text[self.cursor..];
        let Some(grapheme) = rest.graphemes(true).next() else {
            return self.fault.take().map(Err);
        };

        // The last cluster may still grow until the next code point shows up.
        if grapheme.len() == rest.len() && !self.closed {
            return None;
        }

        let out = grapheme.to_owned();
        self.cursor += out.len();
        self.compact();
        Some(Ok(out))
    }

    fn compact(&mut self) {
        if self.cursor == self.text.len() {
            self.text.clear();
            self.cursor = 0;
        } else if self.cursor >= COMPACT_THRESHOLD {
            self.text.drain(..self.cursor);
            self.cursor = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(decoder: &mut Utf8Graphemes) -> Vec<Result<String, ChunkError>> {
        let mut out = Vec::new();
        while let Some(item) = decoder.next_grapheme() {
            out.push(item);
        }
        out
    }

    fn ok(items: Vec<Result<String, ChunkError>>) -> Vec<String> {
        items.into_iter().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_holds_last_cluster_until_closed() {
        let mut decoder = Utf8Graphemes::new();
        decoder.feed(b"ab");
        assert_eq!(ok(drain(&mut decoder)), vec!["a"]);

        decoder.finish();
        assert_eq!(ok(drain(&mut decoder)), vec!["b"]);
        assert!(decoder.next_grapheme().is_none());
    }

    #[test]
    fn test_split_multibyte_sequence() {
        let bytes = "é!".as_bytes();
        let mut decoder = Utf8Graphemes::new();
        decoder.feed(&bytes[..1]);
        assert!(drain(&mut decoder).is_empty());
        decoder.feed(&bytes[1..]);
        assert_eq!(ok(drain(&mut decoder)), vec!["é"]);
        decoder.finish();
        assert_eq!(ok(drain(&mut decoder)), vec!["!"]);
    }

    #[test]
    fn test_combining_mark_in_next_read() {
        let mut decoder = Utf8Graphemes::new();
        decoder.feed(b"e");
        assert!(drain(&mut decoder).is_empty());
        decoder.feed("\u{301}x".as_bytes());
        assert_eq!(ok(drain(&mut decoder)), vec!["e\u{301}"]);
        decoder.finish();
        assert_eq!(ok(drain(&mut decoder)), vec!["x"]);
    }

    #[test]
    fn test_invalid_bytes_after_valid_text() {
        let mut decoder = Utf8Graphemes::new();
        decoder.feed(b"ok\xffmore");
        assert!(decoder.is_closed());

        let items = drain(&mut decoder);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_deref().unwrap(), "o");
        assert_eq!(items[1].as_deref().unwrap(), "k");
        assert!(matches!(items[2], Err(ChunkError::InvalidUtf8 { offset: 2 })));
    }

    #[test]
    fn test_truncated_sequence_at_end() {
        let mut decoder = Utf8Graphemes::new();
        decoder.feed(&"aé".as_bytes()[..2]);
        decoder.finish();

        let items = drain(&mut decoder);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_deref().unwrap(), "a");
        assert!(matches!(items[1], Err(ChunkError::IncompleteUtf8 { offset: 1 })));
    }

    #[test]
    fn test_compaction_keeps_order() {
        let text = "abc ".repeat(COMPACT_THRESHOLD);
        let mut decoder = Utf8Graphemes::new();
        let mut out = String::new();
        for piece in text.as_bytes().chunks(97) {
            decoder.feed(piece);
            for g in ok(drain(&mut decoder)) {
                out.push_str(&g);
            }
        }
        decoder.finish();
        for g in ok(drain(&mut decoder)) {
            out.push_str(&g);
        }
        assert_eq!(out, text);
    }
}
