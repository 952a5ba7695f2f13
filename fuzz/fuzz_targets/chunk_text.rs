#![no_main]

use libfuzzer_sys::fuzz_target;
use speakchunk::{ChunkConfig, ChunkReason, Chunker, ClusterPolicy};

fuzz_target!(|text: &str| {
    let configs = [
        ChunkConfig::new(0, 0, 0).unwrap(),
        ChunkConfig::new(1, 1, 3).unwrap(),
        ChunkConfig::default(),
        ChunkConfig::default().with_cluster_policy(ClusterPolicy::Drop),
        ChunkConfig::new(8, 32, 128).unwrap(),
    ];

    for config in configs {
        let chunker = Chunker::new(config);
        let chunks = chunker.chunk_text(text);

        // Verify: every chunk is trimmed
        for chunk in &chunks {
            assert_eq!(chunk.text.trim(), chunk.text);
        }

        // Verify: a flush can only close the sequence
        if let Some(pos) = chunks.iter().position(|c| c.reason == ChunkReason::Flush) {
            assert_eq!(pos, chunks.len() - 1);
        }

        // Verify: boost chunks only at the front
        for (i, chunk) in chunks.iter().enumerate() {
            if chunk.reason == ChunkReason::Boost {
                assert!(i < config.boost());
            }
        }

        // Verify: determinism, and the lazy iterator agrees
        let lazy: Vec<_> = chunker.chunk_str(text).map(Result::unwrap).collect();
        assert_eq!(chunks, lazy);
    }
});
