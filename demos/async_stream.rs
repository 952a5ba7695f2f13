//! Async streaming chunking example.
//!
//! Reads a file through tokio and yields chunks as a `Stream`, the way a
//! TTS pipeline would feed its synthesizer.
//!
//! Run with:
//!     cargo run --example async_stream --features async-io -- /path/to/story.txt

use futures_util::StreamExt;
use speakchunk::{ChunkConfig, chunk_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "README.md".to_string());

    println!("Async chunking file: {}\n", path);

    let file = tokio::fs::File::open(&path).await?;
    let mut stream = chunk_async(file.compat(), ChunkConfig::default());

    let mut total_chunks = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        total_chunks += 1;

        // Simulate handing the chunk to a synthesizer
        tokio::time::sleep(std::time::Duration::from_millis(1)).await;

        println!("  Chunk {:>4} [{:>5}]: {}", total_chunks, chunk.reason, chunk.text);
    }

    println!("\nTotal: {} chunks", total_chunks);

    Ok(())
}
