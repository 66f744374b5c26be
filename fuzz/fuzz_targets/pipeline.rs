#![no_main]

use libfuzzer_sys::fuzz_target;
use sld_parse::traverse::walk;
use sld_parse::{Node, ParseConfig, parse_template};

// NUL bytes mark holes between chunks.
fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let src = String::from_utf8_lossy(data);
    let chunks: Vec<&str> = src.split('\0').collect();
    let source_len: usize = chunks.iter().map(|chunk| chunk.len()).sum();
    let Ok(root) = parse_template(&chunks, &ParseConfig::default()) else {
        return;
    };
    walk(&root, |node, _| {
        let span = node.span();
        assert!(span.start <= span.end && span.end <= source_len, "{node:?}");
        if let Node::Element(element) = node {
            assert!(element.is_self_closing() || element.end_tag.is_some());
            for child in &element.children {
                assert!(span.start <= child.span().start && child.span().end <= span.end);
            }
        }
    });
});
