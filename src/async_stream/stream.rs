//! Async stream adapter for chunking.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use speakchunk::{chunk_async, ChunkConfig};
//! use futures_io::AsyncRead;
//!
//! async fn speak<R: AsyncRead>(reader: R) -> Result<(), speakchunk::ChunkError> {
//!     let stream = chunk_async(reader, ChunkConfig::default());
//!     futures_util::pin_mut!(stream);
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("[{}] {}", chunk.reason, chunk.text);
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::chunk::Chunk;
use crate::chunker::{Accumulator, Chunker};
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::grapheme::Utf8Graphemes;
use crate::words::{UnicodeWords, WordCounter};

/// Size of each read from the underlying reader.
const READ_BUFFER_SIZE: usize = 8 * 1024;

pin_project! {
    /// A stream that yields chunks from an async reader.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio, async-std, smol, or any futures-compatible runtime.
    ///
    /// The reader is polled only when every chunk completed so far has been
    /// taken, so a consumer that stops polling stops the reads as well. A
    /// read or decoding error is yielded once and ends the stream.
    pub struct ChunkStream<R, W> {
        #[pin]
        reader: R,
        decoder: Utf8Graphemes,
        accumulator: Accumulator<W>,
        ready: VecDeque<Chunk>,
        buffer: Box<[u8]>,
        finished: bool,
    }
}

impl<R, W: WordCounter> ChunkStream<R, W> {
    fn new(reader: R, accumulator: Accumulator<W>) -> Self {
        Self {
            reader,
            decoder: Utf8Graphemes::new(),
            accumulator,
            ready: VecDeque::new(),
            buffer: vec![0u8; READ_BUFFER_SIZE].into_boxed_slice(),
            finished: false,
        }
    }
}

impl<R: AsyncRead, W: WordCounter> Stream for ChunkStream<R, W> {
    type Item = Result<Chunk, ChunkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(chunk) = this.ready.pop_front() {
                return Poll::Ready(Some(Ok(chunk)));
            }
            if *this.finished {
                return Poll::Ready(None);
            }

            // Feed every cluster already decoded before reading more.
            match this.decoder.next_grapheme() {
                Some(Ok(grapheme)) => {
                    this.accumulator.push_into(&grapheme, this.ready);
                    continue;
                }
                Some(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(e)));
                }
                None if this.decoder.is_closed() => {
                    *this.finished = true;
                    this.accumulator.finish_into(this.ready);
                    continue;
                }
                None => {}
            }

            match this.reader.as_mut().poll_read(cx, &mut this.buffer[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(ChunkError::Io(e))));
                }
                Poll::Ready(Ok(0)) => this.decoder.finish(),
                Poll::Ready(Ok(n)) => this.decoder.feed(&this.buffer[..n]),
            }
        }
    }
}

impl<W: WordCounter + Clone> Chunker<W> {
    /// Creates an async chunk stream over a UTF-8 reader.
    ///
    /// Same as [`chunk_async`], using this chunker's configuration and word
    /// counter.
    pub fn chunk_async<R: AsyncRead>(&self, reader: R) -> ChunkStream<R, W> {
        ChunkStream::new(
            reader,
            Accumulator::with_word_counter(*self.config(), self.word_counter().clone()),
        )
    }
}

/// Creates a chunk stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use speakchunk::{chunk_async, ChunkConfig};
///
/// let tokio_reader = tokio::fs::File::open("story.txt").await?;
/// let stream = chunk_async(tokio_reader.compat(), ChunkConfig::default());
/// ```
pub fn chunk_async<R: AsyncRead>(
    reader: R,
    config: ChunkConfig,
) -> ChunkStream<R, UnicodeWords> {
    ChunkStream::new(reader, Accumulator::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ChunkReason;
    use futures_util::StreamExt;
    use futures_util::io::Cursor;
    use std::io;

    /// Returns at most `step` bytes per read and `Pending` every other poll.
    struct Dribble {
        data: Vec<u8>,
        pos: usize,
        step: usize,
        yielded: bool,
    }

    impl AsyncRead for Dribble {
        fn poll_read(
            mut self: Pin<&mut Self>,
            cx: &mut Context<'_>,
            buf: &mut [u8],
        ) -> Poll<io::Result<usize>> {
            if !self.yielded {
                self.yielded = true;
                cx.waker().wake_by_ref();
                return Poll::Pending;
            }
            self.yielded = false;
            let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
            let start = self.pos;
            buf[..n].copy_from_slice(&self.data[start..start + n]);
            self.pos += n;
            Poll::Ready(Ok(n))
        }
    }

    /// Always fails.
    struct Broken;

    impl AsyncRead for Broken {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut [u8],
        ) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")))
        }
    }

    async fn collect<S: Stream<Item = Result<Chunk, ChunkError>>>(
        stream: S,
    ) -> Vec<Result<Chunk, ChunkError>> {
        stream.collect().await
    }

    #[tokio::test]
    async fn test_chunk_stream_empty() {
        let items = collect(chunk_async(Cursor::new(Vec::new()), ChunkConfig::default())).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_chunk_stream_matches_sync() {
        let text = "Grüße! Wie geht's, mein Freund, heute? 2.5 Liter… 👋🏽 Tschüss";
        let expected = Chunker::default().chunk_text(text);

        let reader = Dribble {
            data: text.as_bytes().to_vec(),
            pos: 0,
            step: 3,
            yielded: false,
        };
        let chunks: Vec<_> = collect(chunk_async(reader, ChunkConfig::default()))
            .await
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(chunks, expected);
    }

    #[tokio::test]
    async fn test_chunk_stream_io_error() {
        let items = collect(chunk_async(Broken, ChunkConfig::default())).await;
        assert_eq!(items.len(), 1);
        assert!(matches!(
            &items[0],
            Err(ChunkError::Io(e)) if e.kind() == io::ErrorKind::ConnectionReset
        ));
    }

    #[tokio::test]
    async fn test_chunker_chunk_async_uses_counter() {
        let chunker = Chunker::new(ChunkConfig::default())
            .with_word_counter(|s: &str| s.split_whitespace().count() * 10);
        let items = collect(chunker.chunk_async(Cursor::new(b"one two".to_vec()))).await;
        let chunk = items.into_iter().next().unwrap().unwrap();
        assert_eq!(chunk.words, 20);
        assert_eq!(chunk.reason, ChunkReason::Flush);
    }
}
