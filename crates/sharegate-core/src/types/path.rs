//! Lexical request-path normalization.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped inside a single path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Returns the shortest `/`-rooted path equivalent to `path`.
///
/// Duplicate separators and `.` segments are dropped, `..` removes the
/// preceding segment and never climbs above the root, and any trailing slash
/// is removed. The result always starts with `/`; the root is `"/"`.
pub fn clean(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut cleaned = String::with_capacity(path.len() + 1);
    for segment in &segments {
        cleaned.push('/');
        cleaned.push_str(segment);
    }
    if cleaned.is_empty() {
        cleaned.push('/');
    }
    cleaned
}

/// Cleans `path` like [`clean`] but keeps a trailing slash on non-root paths.
///
/// This is the form authorization decisions are made over, so `..` segments
/// cannot lift a request out of a granted prefix.
pub fn normalize(path: &str) -> String {
    let mut cleaned = clean(path);
    if path.ends_with('/') && cleaned != "/" {
        cleaned.push('/');
    }
    cleaned
}

/// Percent-decodes a raw request path.
///
/// Returns `None` when the decoded bytes are not valid UTF-8.
pub fn decode(raw: &str) -> Option<String> {
    percent_encoding::percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Percent-encodes a decoded path for use in a `Location` header.
///
/// Separators are kept; everything else outside the unreserved set is escaped.
pub fn encode(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Splits a cleaned path into its parent directory and final segment.
///
/// `"/a/b"` yields `("/a", "b")`; `"/a"` yields `("/", "a")`; the root yields
/// `("/", "")`.
pub fn split_last(cleaned: &str) -> (&str, &str) {
    match cleaned.rfind('/') {
        Some(0) => ("/", &cleaned[1..]),
        Some(idx) => (&cleaned[..idx], &cleaned[idx + 1..]),
        None => ("/", cleaned),
    }
}
