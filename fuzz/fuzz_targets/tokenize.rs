#![no_main]

use libfuzzer_sys::fuzz_target;
use sld_parse::{TagSet, tokenize};

// NUL bytes mark holes between chunks.
fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let src = String::from_utf8_lossy(data);
    let chunks: Vec<&str> = src.split('\0').collect();
    let Ok(stream) = tokenize(&chunks, &TagSet::raw_text_elements()) else {
        return;
    };
    let mut last = 0;
    for token in stream.iter() {
        assert!(token.span.start >= last, "offsets went backwards: {token:?}");
        assert!(token.span.start <= token.span.end);
        assert!(token.span.end <= stream.source_len());
        last = token.span.start;
    }
    assert_eq!(stream.hole_count() + 1, chunks.len());
});
