#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Shared helpers for turning a `$ref` string into JSON Pointer segments.
//!
//! These utilities never fetch external documents: a reference naming another
//! document (`common.yaml#/...`, `https://...#/...`) is reported as non-local.

use percent_encoding::percent_decode_str;

/// Returns the local pointer part of a `$ref` (without the leading `#`).
///
/// `#/components/schemas/User` -> `/components/schemas/User`, `#` -> ``.
/// Bare paths without `#` (`components/schemas/User`) are accepted as local.
/// Returns `None` when the reference targets another document.
pub fn local_pointer(ref_str: &str) -> Option<&str> {
    match ref_str.split_once('#') {
        Some(("", fragment)) => Some(fragment),
        Some(_) => None,
        None if ref_str.contains("://") => None,
        None => Some(ref_str),
    }
}

/// Splits a local pointer into decoded segments.
pub fn pointer_segments(pointer: &str) -> Vec<String> {
    let trimmed = pointer.strip_prefix('/').unwrap_or(pointer);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').map(decode_pointer_segment).collect()
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`, then percent-encoding).
pub fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// Extracts the last segment of a reference, used as a display name.
/// e.g. `#/components/schemas/User` -> `User`
pub fn ref_display_name(ref_str: &str) -> String {
    ref_str
        .rsplit('/')
        .next()
        .map(decode_pointer_segment)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_pointer_forms() {
        assert_eq!(
            local_pointer("#/components/schemas/User"),
            Some("/components/schemas/User")
        );
        assert_eq!(local_pointer("#"), Some(""));
        assert_eq!(
            local_pointer("components/schemas/User"),
            Some("components/schemas/User")
        );
        assert_eq!(local_pointer("common.yaml#/components/schemas/User"), None);
        assert_eq!(local_pointer("https://example.com/openapi.yaml"), None);
    }

    #[test]
    fn test_pointer_segments() {
        assert_eq!(
            pointer_segments("/components/schemas/User"),
            vec!["components", "schemas", "User"]
        );
        assert_eq!(pointer_segments("/paths/~1users~1{id}/get"), vec!["paths", "/users/{id}", "get"]);
        assert!(pointer_segments("").is_empty());
    }

    #[test]
    fn test_decode_pointer_segment_percent_encoding() {
        let encoded = "User%20Profile~1details";
        let decoded = decode_pointer_segment(encoded);
        assert_eq!(decoded, "User Profile/details");
    }

    #[test]
    fn test_ref_display_name() {
        assert_eq!(ref_display_name("#/components/schemas/Node"), "Node");
    }
}
