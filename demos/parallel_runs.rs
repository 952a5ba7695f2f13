//! Parallel chunking example.
//!
//! One `Chunker` serves several independent texts at once. Runs share no
//! state, so each blocking task gets its own iterator.
//!
//! Run with:
//!     cargo run --example parallel_runs

use std::sync::Arc;

use speakchunk::{ChunkConfig, Chunker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let texts = vec![
        "Good morning! Today will be sunny, with a high of 24.5 degrees.",
        "Your package has shipped. It should arrive on Thursday; track it online.",
        "Chapter one. It was a bright cold day in April, and the clocks were striking thirteen.",
    ];

    println!("Processing {} texts concurrently...\n", texts.len());

    let chunker = Arc::new(Chunker::new(ChunkConfig::default()));

    let handles: Vec<_> = texts
        .into_iter()
        .enumerate()
        .map(|(id, text)| {
            let chunker = Arc::clone(&chunker);
            tokio::task::spawn_blocking(move || process_text(&chunker, id, text))
        })
        .collect();

    for handle in handles {
        let (id, chunks) = handle.await??;
        println!("Text {}: {} chunks", id, chunks.len());
        for text in chunks {
            println!("  {}", text);
        }
    }

    Ok(())
}

fn process_text(
    chunker: &Chunker,
    id: usize,
    text: &str,
) -> Result<(usize, Vec<String>), speakchunk::ChunkError> {
    let chunks = chunker
        .chunk(text.as_bytes())
        .map(|chunk| chunk.map(|c| c.into_text()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((id, chunks))
}
