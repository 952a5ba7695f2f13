//! File chunking example.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/story.txt

use std::env;
use std::fs::File;

use speakchunk::{ChunkConfig, ChunkReason, Chunker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args().nth(1).unwrap_or_else(|| "README.md".to_string());

    println!("Chunking file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes\n", metadata.len());

    // Longer chunks for narration
    let config = ChunkConfig::new(1, 8, 24)?;
    let chunker = Chunker::new(config);

    let mut total_chunks = 0;
    let mut limit_chunks = 0;

    for chunk in chunker.chunk(file) {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        total_chunks += 1;
        if chunk.reason == ChunkReason::LimitReached {
            limit_chunks += 1;
        }

        println!(
            "Chunk {:>5} [{:>5}] words={:>3}: {}",
            total_chunks, chunk.reason, chunk.words, chunk.text
        );
    }

    println!(
        "\nTotal: {} chunks, {} cut at the word limit",
        total_chunks, limit_chunks
    );

    Ok(())
}
