/// Path utilities for splitting, prefix handling and value encoding
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Splits a path into its non-empty segments
///
/// The leading `/` is structural, and empty segments produced by trailing or
/// doubled slashes are dropped, so `/foo/` and `/foo` yield the same segments.
///
/// # Examples
///
/// ```
/// use routemap::path::segments;
///
/// assert_eq!(segments("/foo/abc/def"), vec!["foo", "abc", "def"]);
/// assert_eq!(segments("/foo/"), vec!["foo"]);
/// assert!(segments("/").is_empty());
/// ```
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Removes `prefix` from the front of `path` if present
///
/// An empty prefix, or a path that does not start with it, returns the path
/// unchanged (zero-copy either way).
///
/// # Examples
///
/// ```
/// use routemap::path::strip_prefix;
///
/// assert_eq!(strip_prefix("#/foo/abc", "#"), "/foo/abc");
/// assert_eq!(strip_prefix("/foo/abc", "#"), "/foo/abc");
/// assert_eq!(strip_prefix("/foo/abc", ""), "/foo/abc");
/// ```
pub fn strip_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Percent-encodes a single parameter value
///
/// Returns `Cow::Borrowed` when nothing needed escaping.
pub fn encode_value(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Percent-encodes a wildcard value, keeping its `/` separators
///
/// Empty pieces are dropped, the same way [`segments`] drops them when the
/// path is matched, so `a//b` renders as `a/b`.
///
/// # Examples
///
/// ```
/// use routemap::path::encode_wildcard;
///
/// assert_eq!(encode_wildcard("abc/def ghi"), "abc/def%20ghi");
/// assert_eq!(encode_wildcard("abc//def/"), "abc/def");
/// ```
pub fn encode_wildcard(value: &str) -> String {
    value
        .split('/')
        .filter(|s| !s.is_empty())
        .map(encode_value)
        .collect::<Vec<_>>()
        .join("/")
}

/// Decodes a percent-encoded segment value
///
/// Input that does not decode to valid UTF-8 is kept verbatim rather than
/// rejected.
///
/// # Examples
///
/// ```
/// use routemap::path::decode_value;
///
/// assert_eq!(decode_value("abc%20def"), "abc def");
/// assert_eq!(decode_value("%FF"), "%FF");
/// ```
pub fn decode_value(value: &str) -> String {
    urlencoding::decode(value)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments() {
        assert_eq!(segments("/foo/bar=abc/def"), vec!["foo", "bar=abc", "def"]);
        assert_eq!(segments("foo//bar/"), vec!["foo", "bar"]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_prefix("#!/foo", "#!"), "/foo");
        assert_eq!(strip_prefix("#!/foo", "#"), "!/foo");
    }

    #[test]
    fn test_encode_value_borrows_when_clean() {
        assert!(matches!(encode_value("abc-123"), Cow::Borrowed("abc-123")));
        assert_eq!(encode_value("a/b"), "a%2Fb");
        assert_eq!(encode_value("x=y"), "x%3Dy");
    }

    #[test]
    fn test_wildcard_keeps_separators() {
        assert_eq!(encode_wildcard("abc/def/ghi"), "abc/def/ghi");
        assert_eq!(encode_wildcard("a b/c"), "a%20b/c");
        assert_eq!(encode_wildcard("/a//b/"), "a/b");
    }

    #[test]
    fn test_decode_value() {
        assert_eq!(decode_value("x%3Dy"), "x=y");
        assert_eq!(decode_value("plain"), "plain");
    }
}
