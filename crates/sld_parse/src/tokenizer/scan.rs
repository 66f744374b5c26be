//! Byte-level scanning helpers for the tokenizer.

use memchr::{memchr, memmem};

pub(super) const COMMENT_OPEN_TAIL: &[u8] = b"!--";
pub(super) const COMMENT_CLOSE: &[u8] = b"-->";
pub(super) const SPREAD: &[u8] = b"...";

/// Whitespace skipped inside tags: `\t \n \x0B \x0C \r` and space.
pub(super) fn is_tag_whitespace(b: u8) -> bool {
    matches!(b, b'\t'..=b'\r' | b' ')
}

pub(super) fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

pub(super) fn is_identifier_char(b: u8) -> bool {
    is_identifier_start(b) || b.is_ascii_digit() || matches!(b, b'-' | b'.' | b':')
}

/// End of the identifier run starting at `start`.
pub(super) fn identifier_end(bytes: &[u8], start: usize) -> usize {
    debug_assert!(is_identifier_start(bytes[start]));
    bytes[start..]
        .iter()
        .position(|&b| !is_identifier_char(b))
        .map_or(bytes.len(), |rel| start + rel)
}

pub(super) fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    memchr(needle, &bytes[from..]).map(|rel| from + rel)
}

pub(super) fn find_comment_close(bytes: &[u8], from: usize) -> Option<usize> {
    memmem::find(&bytes[from..], COMMENT_CLOSE).map(|rel| from + rel)
}

/// Find `<` `/` `name` `>` with optional whitespace around `/` and `name`.
///
/// Matching is case-sensitive and `name` is compared literally. Returns the
/// offset of the `<`, relative to `haystack`.
pub(super) fn find_raw_text_close(haystack: &str, name: &str) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let mut i = 0;
    while let Some(lt) = find_byte(bytes, i, b'<') {
        if close_tag_matches(&haystack[lt + 1..], name) {
            return Some(lt);
        }
        i = lt + 1;
    }
    None
}

fn close_tag_matches(rest: &str, name: &str) -> bool {
    let Some(rest) = rest.trim_start().strip_prefix('/') else {
        return false;
    };
    let Some(rest) = rest.trim_start().strip_prefix(name) else {
        return false;
    };
    rest.trim_start().starts_with('>')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_classes() {
        for b in [b'a', b'Z', b'_', b'$'] {
            assert!(is_identifier_start(b), "{} should start an identifier", b as char);
        }
        for b in [b'0', b'-', b'.', b':', b'@'] {
            assert!(!is_identifier_start(b), "{} should not start an identifier", b as char);
        }
        for b in [b'0', b'9', b'-', b'.', b':'] {
            assert!(is_identifier_char(b));
        }
        assert!(!is_identifier_char(b'='));
        assert_eq!(identifier_end(b"data-x.y:z=1", 0), 10);
        assert_eq!(identifier_end(b"abc", 0), 3);
    }

    #[test]
    fn raw_text_close_accepts_inner_whitespace() {
        assert_eq!(find_raw_text_close("abc</textarea>", "textarea"), Some(3));
        assert_eq!(find_raw_text_close("<  /   textarea   >", "textarea"), Some(0));
        assert_eq!(find_raw_text_close("x<\n/\ttextarea\n>", "textarea"), Some(1));
    }

    #[test]
    fn raw_text_close_rejects_near_matches() {
        assert_eq!(find_raw_text_close("</TEXTAREA>", "textarea"), None);
        assert_eq!(find_raw_text_close("</textareax>", "textarea"), None);
        assert_eq!(find_raw_text_close("</textarea", "textarea"), None);
        assert_eq!(find_raw_text_close("<textarea>", "textarea"), None);
        assert_eq!(
            find_raw_text_close("</scriptx></script >", "script"),
            Some(10)
        );
    }

    #[test]
    fn raw_text_close_treats_name_literally() {
        assert_eq!(find_raw_text_close("</a-b>", "a.b"), None);
        assert_eq!(find_raw_text_close("</a.b>", "a.b"), Some(0));
    }

    #[test]
    fn comment_close_search() {
        assert_eq!(find_comment_close(b"abc-->", 0), Some(3));
        assert_eq!(find_comment_close(b"--->", 0), Some(1));
        assert_eq!(find_comment_close(b"-- >", 0), None);
    }
}
