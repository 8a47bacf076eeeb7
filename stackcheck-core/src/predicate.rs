//! Text and JSON predicates shared by the rubrics.
//!
//! Every function here is total: lookups that miss return `None`, and JSON
//! parse failures come back as values rather than panics.

use serde_json::Value;

/// Comment marker recognised at the start of a line.
pub const COMMENT_MARKER: char = '#';

/// One step of a [`field_path`] lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Object member by name.
    Key(&'a str),
    /// Array element by position.
    Index(usize),
}

/// Exact substring presence.
pub fn contains_literal(text: &str, literal: &str) -> bool {
    text.contains(literal)
}

/// Whether `directive` occurs on at least one line that is not commented out.
///
/// A line is commented out when its first non-whitespace character is `#`.
/// Trailing comments do not hide a directive that precedes them.
pub fn directive_is_live(text: &str, directive: &str) -> bool {
    text.lines()
        .map(str::trim_start)
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .any(|line| line.contains(directive))
}

/// Whether `directive` is absent or only appears on commented-out lines.
pub fn directive_is_commented(text: &str, directive: &str) -> bool {
    !directive_is_live(text, directive)
}

/// Whether any of `directives` is live.
pub fn any_directive_is_live(text: &str, directives: &[&str]) -> bool {
    directives
        .iter()
        .any(|directive| directive_is_live(text, directive))
}

/// Strict JSON parse.
pub fn parse_json(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

/// Walk `path` into `value`, returning `None` at the first missing segment.
pub fn field_path<'v>(value: &'v Value, path: &[PathSegment<'_>]) -> Option<&'v Value> {
    path.iter().try_fold(value, |current, segment| match segment {
        PathSegment::Key(key) => current.as_object()?.get(*key),
        PathSegment::Index(index) => current.as_array()?.get(*index),
    })
}

/// Array at `path`, or an empty slice when absent or not an array.
pub fn array_at<'v>(value: &'v Value, path: &[PathSegment<'_>]) -> &'v [Value] {
    field_path(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Non-empty string at `path`.
pub fn str_at<'v>(value: &'v Value, path: &[PathSegment<'_>]) -> Option<&'v str> {
    field_path(value, path)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}
