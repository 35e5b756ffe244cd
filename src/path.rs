//! Dot-notation path handling.
//!
//! Paths split on `.` with no validation: empty segments are legal
//! zero-length keys, and a dotless path is a single segment. The reader
//! additionally treats a whole path that exists as a literal map key as
//! a direct hit before any splitting happens; that check lives with the
//! reader, not here.

/// Sentinel path meaning "replace the whole root" in [`crate::set`].
pub const WILDCARD: &str = "*";

/// Splits a path into its dot-delimited segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

/// Splits a path at its last dot into `(prefix, final segment)`.
pub fn split_last(path: &str) -> Option<(&str, &str)> {
    path.rsplit_once('.')
}

/// True when the path addresses the whole root rather than a location
/// inside it.
pub fn is_wildcard(path: Option<&str>) -> bool {
    match path {
        None => true,
        Some(p) => p == WILDCARD,
    }
}
