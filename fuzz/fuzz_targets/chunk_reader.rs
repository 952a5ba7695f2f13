#![no_main]

use std::io::{self, Read};

use libfuzzer_sys::fuzz_target;
use speakchunk::{ChunkError, Chunker};

/// Hands out the input in reads of `step` bytes.
struct Steps<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Steps<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&step, data)) = data.split_first() else {
        return;
    };
    let step = usize::from(step % 13) + 1;
    let chunker = Chunker::default();

    let items: Vec<_> = chunker.chunk(Steps { data, step }).collect();

    match std::str::from_utf8(data) {
        Ok(text) => {
            // Verify: valid input never fails and matches the in-memory path
            let chunks: Vec<_> = items.into_iter().map(Result::unwrap).collect();
            assert_eq!(chunks, chunker.chunk_text(text));
        }
        Err(e) => {
            // Verify: exactly one error, last, at the first bad byte
            let (last, rest) = items.split_last().unwrap();
            assert!(rest.iter().all(Result::is_ok));
            match last {
                Err(ChunkError::InvalidUtf8 { offset })
                | Err(ChunkError::IncompleteUtf8 { offset }) => {
                    assert_eq!(*offset, e.valid_up_to() as u64);
                }
                other => panic!("unexpected item: {other:?}"),
            }
        }
    }
});
