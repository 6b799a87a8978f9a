//! Conditional and range responses over cached content.

use std::ops::Bound;
use std::time::SystemTime;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::headers::{AcceptRanges, HeaderMapExt, IfModifiedSince, LastModified, Range};

use crate::store::CacheEntry;

/// Builds the response for `entry` given the request headers.
///
/// `name` is the file name used to guess the content type. Supports
/// `If-Modified-Since` and a single byte range; requests for several ranges
/// receive the full body.
pub fn respond(entry: &CacheEntry, name: &str, request: &HeaderMap) -> Response {
    let mut headers = HeaderMap::new();

    let mime = mime_guess::from_path(name).first_or_octet_stream();
    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    headers.typed_insert(AcceptRanges::bytes());

    if entry.modified > SystemTime::UNIX_EPOCH {
        headers.typed_insert(LastModified::from(entry.modified));

        if let Some(since) = request.typed_get::<IfModifiedSince>() {
            if !since.is_modified(entry.modified) {
                return (StatusCode::NOT_MODIFIED, headers).into_response();
            }
        }
    }

    let len = entry.content.len() as u64;
    if let Some(range) = request.typed_get::<Range>() {
        let mut ranges: Vec<(Bound<u64>, Bound<u64>)> = range.satisfiable_ranges(len).collect();
        for _ in 0..oversized_suffixes(request, len) {
            ranges.push((Bound::Included(0), Bound::Unbounded));
        }
        match ranges.as_slice() {
            [] => return unsatisfiable(headers, len),
            [(start, end)] => {
                let Some((start, end)) = byte_span(*start, *end, len) else {
                    return unsatisfiable(headers, len);
                };
                if let Ok(value) =
                    HeaderValue::from_str(&format!("bytes {}-{}/{}", start, end - 1, len))
                {
                    headers.insert(header::CONTENT_RANGE, value);
                }
                let body = entry.content.slice(start as usize..end as usize);
                return (StatusCode::PARTIAL_CONTENT, headers, Body::from(body)).into_response();
            }
            _ => {}
        }
    }

    (StatusCode::OK, headers, Body::from(entry.content.clone())).into_response()
}

/// Converts range bounds to a half-open `[start, end)` span within `len`.
fn byte_span(start: Bound<u64>, end: Bound<u64>, len: u64) -> Option<(u64, u64)> {
    let start = match start {
        Bound::Included(s) => s,
        Bound::Excluded(s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match end {
        Bound::Included(e) => e.saturating_add(1),
        Bound::Excluded(e) => e,
        Bound::Unbounded => len,
    }
    .min(len);

    (start < end).then_some((start, end))
}

/// Counts `-N` suffix specs with `N` past the body length. These select the
/// whole body but are dropped by `Range::satisfiable_ranges`.
fn oversized_suffixes(request: &HeaderMap, len: u64) -> usize {
    let Some(specs) = request
        .get(header::RANGE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("bytes="))
    else {
        return 0;
    };

    specs
        .split(',')
        .filter_map(|spec| spec.trim().strip_prefix('-'))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .filter(|&suffix| suffix > len)
        .count()
}

fn unsatisfiable(mut headers: HeaderMap, len: u64) -> Response {
    if let Ok(value) = HeaderValue::from_str(&format!("bytes */{len}")) {
        headers.insert(header::CONTENT_RANGE, value);
    }
    (StatusCode::RANGE_NOT_SATISFIABLE, headers).into_response()
}
