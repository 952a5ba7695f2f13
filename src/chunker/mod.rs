//! Chunking engine for text streams.
//!
//! - [`Accumulator`] - Stateful engine with `push()`/`finish()` API
//! - [`Chunker`] - Configured front end that builds lazy chunk iterators
//! - [`ChunkIter`] - Iterator pulling clusters from a [`GraphemeSource`](crate::GraphemeSource)

mod engine;
mod iter;

pub use engine::Accumulator;
pub use iter::{ChunkIter, Chunker};
