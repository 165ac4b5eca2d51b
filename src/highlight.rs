//! Highlight span computation for search result display.
//!
//! Two flavors: a first-occurrence three-way split for entry heads, and a
//! whole-text replace-all segmentation for example sentences. Both are
//! computed fresh per query and never stored on the corpus.

use regex::RegexBuilder;
use serde::Serialize;

/// Result of locating a query inside an entry head.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadHighlight {
    /// No query, or no occurrence: the head text passes through unchanged.
    Plain(String),
    /// The three-way split around the first occurrence. `middle` preserves the
    /// head's original casing, not the query's.
    Split {
        before: String,
        middle: String,
        after: String,
    },
}

impl HeadHighlight {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Split { .. })
    }
}

/// Locate the first case-insensitive occurrence of `query` in `head`.
///
/// An empty or whitespace-only query, or a query with no occurrence, returns
/// the head unchanged. Only the first occurrence is split; callers that need
/// every occurrence marked use [`highlight_all`].
pub fn highlight_head(head: &str, query: &str) -> HeadHighlight {
    let needle = query.trim();
    if needle.is_empty() {
        return HeadHighlight::Plain(head.to_string());
    }
    match find_case_insensitive(head, needle) {
        Some((start, end)) => HeadHighlight::Split {
            before: head[..start].to_string(),
            middle: head[start..end].to_string(),
            after: head[end..].to_string(),
        },
        None => HeadHighlight::Plain(head.to_string()),
    }
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack`, comparing character by character.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    for (start, _) in haystack.char_indices() {
        let mut hay_chars = haystack[start..].chars();
        let mut consumed = 0usize;
        let mut matched = true;
        for nc in needle.chars() {
            match hay_chars.next() {
                Some(hc) if hc.to_lowercase().eq(nc.to_lowercase()) => {
                    consumed += hc.len_utf8();
                }
                _ => {
                    matched = false;
                    break;
                }
            }
        }
        if matched {
            return Some((start, start + consumed));
        }
    }
    None
}

/// A piece of a sentence after whole-text highlighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Mark(String),
}

/// Mark every case-insensitive occurrence of `needle` in `text`.
///
/// The pattern is built from the raw needle without escaping: a needle
/// containing pattern metacharacters is interpreted as a pattern. A needle
/// that fails to compile degrades to no highlighting rather than an error.
pub fn highlight_all(text: &str, needle: &str) -> Vec<Segment> {
    let needle = needle.trim();
    if needle.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }
    let re = match RegexBuilder::new(needle).case_insensitive(true).build() {
        Ok(re) => re,
        Err(_) => return vec![Segment::Plain(text.to_string())],
    };

    let mut segments = Vec::new();
    let mut last = 0usize;
    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Plain(text[last..m.start()].to_string()));
        }
        if !m.as_str().is_empty() {
            segments.push(Segment::Mark(m.as_str().to_string()));
        }
        last = m.end();
    }
    if last < text.len() || segments.is_empty() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }
    segments
}
