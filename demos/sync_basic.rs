//! Basic synchronous chunking example with the push API.
//!
//! Text arrives in small pieces, the way tokens come out of a language
//! model, and chunks are printed as soon as they are complete.
//!
//! Run with:
//!     cargo run --example sync_basic

use speakchunk::{Accumulator, ChunkConfig};

const REPLY: &str = "Sure! The recipe needs 2.5 cups of flour, a pinch of salt, \
and about 1,200 grams of patience. First, mix the dry ingredients; then add the \
water slowly, stirring as you go. Let it rest for an hour… Enjoy";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ChunkConfig::new(
        2,  // boost: first two chunks cut early
        4,  // minimum words before a limit flush
        12, // maximum words per chunk
    )?;

    let mut accumulator = Accumulator::new(config);

    println!("Chunking {} bytes of text...\n", REPLY.len());

    let mut total_chunks = 0;
    let mut total_words = 0;

    // Simulate streaming tokens of a few characters each
    let pieces: Vec<char> = REPLY.chars().collect();
    for piece in pieces.chunks(7) {
        let piece: String = piece.iter().collect();

        for chunk in accumulator.push(&piece) {
            total_chunks += 1;
            total_words += chunk.words;
            println!(
                "Chunk {:>2} [{:>5}] words={:>2}: {}",
                total_chunks, chunk.reason, chunk.words, chunk.text
            );
        }
    }

    // Finalize stream
    for chunk in accumulator.finish() {
        if chunk.is_empty() {
            continue;
        }
        total_chunks += 1;
        total_words += chunk.words;
        println!(
            "Chunk {:>2} [{:>5}] words={:>2}: {}",
            total_chunks, chunk.reason, chunk.words, chunk.text
        );
    }

    println!("\nTotal: {} chunks, {} words", total_chunks, total_words);
    if total_chunks > 0 {
        println!("Average chunk: {} words", total_words / total_chunks);
    }

    Ok(())
}
