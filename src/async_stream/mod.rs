//! Chunking over async byte streams.
//!
//! Input comes from any `futures_io::AsyncRead`; tokio readers plug in via
//! `tokio_util::compat`. Decoding and accumulation are the same as on the
//! blocking path, only the reads are polled.
//!
//! - [`ChunkStream`] - `Stream` of chunks over an async reader
//! - [`chunk_async`] - Starts a stream with the default word counter
//!
//! Requires the `async-io` feature.

mod stream;

pub use stream::{ChunkStream, chunk_async};
