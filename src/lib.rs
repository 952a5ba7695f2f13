//! speakchunk
//!
//! Streaming text chunking for text-to-speech.
//!
//! `speakchunk` turns an unbounded stream of Unicode text into a lazy
//! sequence of short, speakable chunks, one chunk per synthesizer call. It
//! balances two goals:
//!
//! - low first-audio latency: the first few chunks are cut at the first
//!   breakpoint of any kind (the boost budget)
//! - natural prosody afterwards: chunks end at sentence terminators, and at
//!   clause separators only when a word-count ceiling forces it
//!
//! The crate intentionally:
//! - does NOT synthesize audio
//! - does NOT detect languages or analyze grammar
//! - does NOT manage concurrency or backpressure
//!
//! It only does one thing: **Read text → yield speakable chunks**
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use speakchunk::{ChunkConfig, ChunkError, Chunker};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let file = File::open("story.txt")?;
//!     let chunker = Chunker::new(ChunkConfig::default());
//!
//!     for chunk in chunker.chunk(file) {
//!         let chunk = chunk?;
//!         println!("[{}] {}", chunk.reason, chunk.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use speakchunk::{chunk_async, ChunkConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), speakchunk::ChunkError> {
//!     let mut stream = chunk_async(reader, ChunkConfig::default());
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("{}", chunk.text);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod error;
mod grapheme;
mod words;

mod classify; // internal breakpoint tables

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use chunk::{Chunk, ChunkReason};
pub use chunker::{Accumulator, ChunkIter, Chunker};
pub use config::{
    ChunkConfig, ClusterPolicy, DEFAULT_BOOST, DEFAULT_MAXIMUM_WORDS, DEFAULT_MINIMUM_WORDS,
};
pub use error::ChunkError;
pub use grapheme::{GraphemeSource, ReadGraphemes, StrGraphemes};
pub use words::{UnicodeWords, WordCounter};

#[cfg(feature = "async-io")]
pub use async_stream::{ChunkStream, chunk_async};
