//! Grapheme clusters from a blocking byte reader.

use std::io::{ErrorKind, Read};

use super::{GraphemeSource, Utf8Graphemes};
use crate::error::ChunkError;

/// Size of each read from the underlying reader.
const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Grapheme clusters decoded from a UTF-8 byte stream.
///
/// Reads up to 8 KiB at a time, and only when the clusters decoded so far
/// are used up, so a consumer that stops pulling stops the reads too.
/// Interrupted reads are retried; any other I/O error is yielded once.
///
/// # Example
///
/// ```
/// use speakchunk::{GraphemeSource, ReadGraphemes};
///
/// let mut source = ReadGraphemes::new("né".as_bytes());
/// assert_eq!(source.next_grapheme().unwrap()?, "n");
/// assert_eq!(source.next_grapheme().unwrap()?, "é");
/// assert!(source.next_grapheme().is_none());
/// # Ok::<(), speakchunk::ChunkError>(())
/// ```
#[derive(Debug)]
pub struct ReadGraphemes<R> {
    reader: R,
    decoder: Utf8Graphemes,
    buffer: Box<[u8]>,
}

impl<R: Read> ReadGraphemes<R> {
    /// Creates a source reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            decoder: Utf8Graphemes::new(),
            buffer: vec![0u8; READ_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Consumes the source and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> GraphemeSource for ReadGraphemes<R> {
    fn next_grapheme(&mut self) -> Option<Result<String, ChunkError>> {
        loop {
            if let Some(item) = self.decoder.next_grapheme() {
                return Some(item);
            }
            if self.decoder.is_closed() {
                return None;
            }

            match self.reader.read(&mut self.buffer) {
                Ok(0) => self.decoder.finish(),
                Ok(n) => self.decoder.feed(&self.buffer[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
