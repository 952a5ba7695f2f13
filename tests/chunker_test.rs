// Integration tests for the Chunker and Accumulator APIs
// Tests cover: boost/limit/hard/flush semantics, decimals, sources, reuse

use std::io::{self, Cursor, Read};

use speakchunk::{
    Accumulator, Chunk, ChunkConfig, ChunkError, ChunkReason, Chunker, ClusterPolicy,
};

fn texts(chunks: &[Chunk]) -> Vec<&str> {
    chunks.iter().map(|c| c.text.as_str()).collect()
}

fn reasons(chunks: &[Chunk]) -> Vec<ChunkReason> {
    chunks.iter().map(|c| c.reason).collect()
}

/// Returns at most `step` bytes per read.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_empty_input() {
    let chunker = Chunker::default();
    assert!(
        chunker.chunk_text("").is_empty(),
        "Empty input should produce no chunks"
    );
    assert_eq!(
        chunker.chunk(Cursor::new(Vec::new())).count(),
        0,
        "Empty reader should produce no chunks"
    );
}

#[test]
fn test_short_input_without_breakpoint() {
    let chunks = Chunker::default().chunk_text("hello world");
    assert_eq!(
        chunks,
        vec![Chunk::new("hello world", 2, ChunkReason::Flush)],
        "Short input without breakpoints should be a single flush chunk"
    );
}

#[test]
fn test_whitespace_only_input_flushes_empty_text() {
    let chunks = Chunker::default().chunk_text("   ");
    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].is_empty());
    assert_eq!(chunks[0].words, 0);
}

#[test]
fn test_texts_are_trimmed() {
    let chunks = Chunker::default().chunk_text("  Hello there.   Next one,  and more  ");
    for chunk in &chunks {
        assert_eq!(chunk.text, chunk.text.trim(), "Chunk {:?} not trimmed", chunk.text);
    }
}

// ============================================================================
// Boost Budget
// ============================================================================

#[test]
fn test_boost_front_loads_first_chunks() {
    let text = "First clause, second clause, third clause, fourth clause, fifth clause.";
    let chunks = Chunker::default().chunk_text(text);

    assert_eq!(
        reasons(&chunks),
        vec![ChunkReason::Boost, ChunkReason::Boost, ChunkReason::HardBreak]
    );
    assert_eq!(
        texts(&chunks),
        vec![
            "First clause,",
            "second clause,",
            "third clause, fourth clause, fifth clause."
        ]
    );
}

#[test]
fn test_zero_boost_never_boosts() {
    let config = ChunkConfig::default().with_boost(0);
    let chunks = Chunker::new(config).chunk_text("a, b, c. d, e");
    assert_eq!(texts(&chunks), vec!["a, b, c.", "d, e"]);
    assert!(!chunks.iter().any(|c| c.reason == ChunkReason::Boost));
}

#[test]
fn test_hard_break_counts_against_boost() {
    let chunks = Chunker::default().chunk_text("One. Two. Three, four, five");
    assert_eq!(
        reasons(&chunks),
        vec![ChunkReason::HardBreak, ChunkReason::HardBreak, ChunkReason::Flush]
    );
}

#[test]
fn test_large_boost_splits_every_breakpoint() {
    let config = ChunkConfig::default().with_boost(100);
    let chunks = Chunker::new(config).chunk_text("a, b; c: d");
    assert_eq!(texts(&chunks), vec!["a,", "b;", "c:", "d"]);
}

// ============================================================================
// Word-Count Limits
// ============================================================================

#[test]
fn test_limit_preflush_in_steady_state() {
    let config = ChunkConfig::default().with_boost(0);
    let chunks = Chunker::new(config).chunk_text("a b c, d e f, g h i, j k l, m n o.");

    assert_eq!(
        chunks,
        vec![
            Chunk::new("a b c, d e f, g h i, j k l,", 12, ChunkReason::LimitReached),
            Chunk::new("m n o.", 3, ChunkReason::HardBreak),
        ]
    );
}

#[test]
fn test_soft_break_emits_past_maximum() {
    let config = ChunkConfig::new(0, 4, 5).unwrap();
    let chunks = Chunker::new(config).chunk_text("one two three four five six, seven");

    assert_eq!(
        chunks,
        vec![
            Chunk::new("one two three four five six,", 6, ChunkReason::LimitReached),
            Chunk::new("seven", 1, ChunkReason::Flush),
        ]
    );
}

#[test]
fn test_emphasis_mark_kept_at_limit_split() {
    // The question mark closes the flushed chunk and also ends the next one.
    let config = ChunkConfig::new(0, 2, 5).unwrap();
    let chunks = Chunker::new(config).chunk_text("we went there, did you see it?");
    assert_eq!(texts(&chunks), vec!["we went there,?", "did you see it?"]);
    assert_eq!(chunks[0].reason, ChunkReason::LimitReached);
}

#[test]
fn test_boost_chunks_respect_maximum() {
    let config = ChunkConfig::new(5, 1, 3).unwrap();
    let text = "one, two three, four five six seven, eight, nine ten, eleven";
    let chunks = Chunker::new(config).chunk_text(text);

    for chunk in chunks.iter().filter(|c| c.reason == ChunkReason::Boost) {
        assert!(chunk.words <= config.maximum_words(), "{chunk:?} exceeds maximum");
    }
    assert!(chunks.iter().any(|c| c.reason == ChunkReason::LimitReached));
}

// ============================================================================
// Decimal and Thousands Separators
// ============================================================================

#[test]
fn test_decimal_point_does_not_split() {
    let config = ChunkConfig::default().with_minimum_words(12);
    let chunks = Chunker::new(config).chunk_text("3.14 is pi.");
    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].text.contains("314"));
    assert_eq!(chunks[0].reason, ChunkReason::HardBreak);
}

#[test]
fn test_grouped_digits() {
    let chunks = Chunker::default().chunk_text("It costs 1,234,567.89 dollars");
    assert_eq!(texts(&chunks), vec!["It costs 123456789 dollars"]);
}

#[test]
fn test_sentence_ending_in_number() {
    let chunks = Chunker::default().chunk_text("I am 42. You are 7, right");
    assert_eq!(texts(&chunks), vec!["I am 42.", "You are 7,", "right"]);
}

#[test]
fn test_decimal_split_across_reads() {
    let text = "Pi is 3.14159, roughly.";
    let expected = Chunker::default().chunk_text(text);
    let chunks: Vec<_> = Chunker::default()
        .chunk(Trickle {
            data: text.as_bytes(),
            step: 1,
        })
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(chunks, expected);
}

// ============================================================================
// Breakpoint Sets
// ============================================================================

#[test]
fn test_redundant_punctuation_is_discarded() {
    let chunks = Chunker::default().chunk_text("!!!Wow!!! Really?!");
    assert_eq!(texts(&chunks), vec!["Wow!", "Really?"]);
}

#[test]
fn test_line_breaks_and_tabs_are_hard() {
    let config = ChunkConfig::default().with_boost(0);
    let chunks = Chunker::new(config).chunk_text("Name\tValue\nNext line");
    assert_eq!(texts(&chunks), vec!["Name", "Value", "Next line"]);
}

#[test]
fn test_japanese_quotes_and_punctuation() {
    let config = ChunkConfig::default().with_boost(0);
    let chunks = Chunker::new(config).chunk_text("彼は「こんにちは」と言った。そして、帰った");
    assert_eq!(
        texts(&chunks),
        vec!["彼は「", "こんにちは」", "と言った。", "そして、帰った"]
    );
}

#[test]
fn test_fullwidth_emphasis() {
    let chunks = Chunker::default().chunk_text("本当？すごい！");
    assert_eq!(texts(&chunks), vec!["本当？", "すごい！"]);
}

// ============================================================================
// Multi-Code-Point Clusters
// ============================================================================

#[test]
fn test_cluster_policy_keep_and_drop() {
    let text = "Nice 👍🏽 work.";

    let kept = Chunker::default().chunk_text(text);
    assert_eq!(texts(&kept), vec!["Nice 👍🏽 work."]);

    let config = ChunkConfig::default().with_cluster_policy(ClusterPolicy::Drop);
    let dropped = Chunker::new(config).chunk_text(text);
    assert_eq!(texts(&dropped), vec!["Nice  work."]);
    assert_eq!(kept[0].words, dropped[0].words);
}

// ============================================================================
// Sources and Errors
// ============================================================================

#[test]
fn test_determinism_across_read_sizes() {
    let text = "Guten Tag! Ça va, mon ami? 日本語のテキスト、とても長い。\n🇯🇵🇫🇷 flags, done";
    let expected = Chunker::default().chunk_text(text);

    for step in [1, 2, 3, 5, 7, 64, 8192] {
        let chunks: Vec<_> = Chunker::default()
            .chunk(Trickle {
                data: text.as_bytes(),
                step,
            })
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(chunks, expected, "Read size {step} changed the chunks");
    }
}

#[test]
fn test_truncated_utf8_is_reported() {
    let mut bytes = b"Fine. Then ".to_vec();
    bytes.extend_from_slice(&"é".as_bytes()[..1]);

    let items: Vec<_> = Chunker::default().chunk(Cursor::new(bytes)).collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_ref().unwrap().text, "Fine.");
    assert!(matches!(
        items[1],
        Err(ChunkError::IncompleteUtf8 { offset: 11 })
    ));
}

#[test]
fn test_stop_early_stops_reading() {
    struct CountingReader<'a> {
        inner: Trickle<'a>,
        reads: usize,
    }

    impl Read for CountingReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reads += 1;
            self.inner.read(buf)
        }
    }

    let text = "Short. ".repeat(1000);
    let mut reader = CountingReader {
        inner: Trickle {
            data: text.as_bytes(),
            step: 16,
        },
        reads: 0,
    };

    let first: Vec<_> = Chunker::default().chunk(&mut reader).take(2).collect();
    assert_eq!(first.len(), 2);
    assert!(reader.reads <= 2, "Read {} times for two chunks", reader.reads);
}

// ============================================================================
// Accumulator and Configuration
// ============================================================================

#[test]
fn test_accumulator_matches_chunker() {
    let text = "Alpha, beta, gamma, delta, epsilon; zeta. Eta";
    let mut acc = Accumulator::new(ChunkConfig::default());
    let mut chunks = Vec::new();
    for c in text.chars() {
        chunks.extend(acc.push(c.encode_utf8(&mut [0; 4])));
    }
    chunks.extend(acc.finish());

    assert_eq!(chunks, Chunker::default().chunk_text(text));
}

#[test]
fn test_accumulator_token_sized_pieces() {
    let text = "Sure! The recipe needs 2.5 cups of flour, a pinch of salt, and more. Enjoy 👍🏽";
    let chars: Vec<char> = text.chars().collect();

    for policy in [ClusterPolicy::Keep, ClusterPolicy::Drop] {
        let config = ChunkConfig::default().with_cluster_policy(policy);
        let expected = Chunker::new(config).chunk_text(text);
        assert!(expected.len() > 1);

        for size in [2, 3, 7, 16] {
            let mut acc = Accumulator::new(config);
            let mut chunks = Vec::new();
            for piece in chars.chunks(size) {
                chunks.extend(acc.push(&piece.iter().collect::<String>()));
            }
            chunks.extend(acc.finish());

            assert_eq!(chunks, expected, "{policy:?} with {size}-char pieces");
        }
    }
}

#[test]
fn test_accumulator_reset_discards_text() {
    let mut acc = Accumulator::default();
    acc.push("h");
    acc.push("i");
    assert_eq!(acc.pending_len(), 2);

    acc.reset();
    assert_eq!(acc.pending_len(), 0);
    assert!(acc.finish().is_empty(), "finish() after reset should emit nothing");
}

#[test]
fn test_config_validation() {
    assert!(ChunkConfig::new(2, 4, 12).is_ok());
    assert!(ChunkConfig::new(0, 0, 0).is_ok());
    assert!(matches!(
        ChunkConfig::new(2, 20, 12),
        Err(ChunkError::InvalidConfig { .. })
    ));
}

#[test]
fn test_parallel_independent_runs() {
    let chunker = Chunker::default();
    let inputs = ["One. Two.", "Three, four, five six.", "seven"];

    let shared = &chunker;

    let results: Vec<Vec<Chunk>> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|text| scope.spawn(move || shared.chunk_text(text)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (text, chunks) in inputs.iter().zip(&results) {
        assert_eq!(chunks, &chunker.chunk_text(text));
    }
}
