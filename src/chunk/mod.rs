//! Chunk types.
//!
//! - [`Chunk`] - Speakable text with its word count and emission reason
//! - [`ChunkReason`] - Why a chunk was emitted

mod data;
mod reason;

pub use data::Chunk;
pub use reason::ChunkReason;
