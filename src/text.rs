//! Text normalization for display, grouping keys, and sort order.
//!
//! These are pure functions over arbitrary field values. Grouping in the
//! morphology indexer uses raw labels; `normalize_key` exists only for stable
//! anchor identifiers, and `sort_key` only for ordering.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::corpus::FieldValue;

/// Full-width semicolon used to join list-valued display fields.
pub const LIST_SEPARATOR: &str = "；";

/// Separator used when a morphological field stores multiple parts.
pub const LABEL_SEPARATOR: &str = " + ";

/// Produce a stable anchor key for a label: lowercased, with every run of
/// non-alphanumeric characters collapsed to a single hyphen and leading and
/// trailing hyphens stripped. An empty result becomes the literal `"na"`.
///
/// Never used for index grouping; grouping is by raw label.
pub fn normalize_key(label: &str) -> String {
    let lowered = label.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for c in lowered.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    if out.is_empty() {
        "na".to_string()
    } else {
        out
    }
}

/// The letter-map bucket for a label: leading whitespace and hyphens are
/// stripped, and the first character is uppercased. Anything outside A-Z falls
/// into the `'#'` catch-all bucket.
pub fn initial_of(label: &str) -> char {
    let stripped = label.trim_start_matches(|c: char| c.is_whitespace() || c == '-');
    match stripped.chars().next() {
        Some(c) => {
            let upper = c.to_ascii_uppercase();
            if upper.is_ascii_uppercase() {
                upper
            } else {
                '#'
            }
        }
        None => '#',
    }
}

/// Render a loosely-typed field value as display text.
///
/// Lists are joined with a full-width semicolon (null elements become empty
/// strings); missing values become the empty string; scalars are trimmed.
pub fn normalize_text(value: Option<&FieldValue>) -> String {
    match value {
        None => String::new(),
        Some(FieldValue::Text(s)) => s.trim().to_string(),
        Some(FieldValue::List(items)) => items
            .iter()
            .map(|item| item.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)
            .trim()
            .to_string(),
    }
}

/// Render a morphological field value as an index label.
///
/// List values are joined with `" + "` (a word whose root is stored as
/// `["spect", "spec"]` indexes under the single label `"spect + spec"`).
pub fn label_text(value: Option<&FieldValue>) -> String {
    match value {
        None => String::new(),
        Some(FieldValue::Text(s)) => s.trim().to_string(),
        Some(FieldValue::List(items)) => items
            .iter()
            .map(|item| item.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(LABEL_SEPARATOR)
            .trim()
            .to_string(),
    }
}

/// Collation key for label ordering: case-insensitive and accent-insensitive
/// (base sensitivity), approximating an "en" locale comparison. Accents are
/// stripped via NFD decomposition.
pub fn sort_key(label: &str) -> String {
    label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_basic() {
        assert_eq!(normalize_key("ab-"), "ab");
        assert_eq!(normalize_key("Re / Re-"), "re-re");
        assert_eq!(normalize_key("  spect  "), "spect");
    }

    #[test]
    fn test_normalize_key_collapses_runs() {
        assert_eq!(normalize_key("a!!b??c"), "a-b-c");
        assert_eq!(normalize_key("--a--b--"), "a-b");
    }

    #[test]
    fn test_normalize_key_empty_is_na() {
        assert_eq!(normalize_key(""), "na");
        assert_eq!(normalize_key("---"), "na");
        assert_eq!(normalize_key("无"), "na");
    }

    #[test]
    fn test_initial_of_letters() {
        assert_eq!(initial_of("ab-"), 'A');
        assert_eq!(initial_of("-less"), 'L');
        assert_eq!(initial_of("  spect"), 'S');
        assert_eq!(initial_of("Zoo"), 'Z');
    }

    #[test]
    fn test_initial_of_catch_all() {
        assert_eq!(initial_of(""), '#');
        assert_eq!(initial_of("词干"), '#');
        assert_eq!(initial_of("1st"), '#');
        assert_eq!(initial_of("- -"), '#');
    }

    #[test]
    fn test_normalize_text_scalar() {
        assert_eq!(normalize_text(Some(&FieldValue::from("  离开  "))), "离开");
        assert_eq!(normalize_text(None), "");
    }

    #[test]
    fn test_normalize_text_list_join() {
        let value = FieldValue::List(vec![Some("a".to_string()), Some("b".to_string())]);
        assert_eq!(normalize_text(Some(&value)), "a；b");
    }

    #[test]
    fn test_normalize_text_list_null_elements() {
        let value = FieldValue::List(vec![Some("a".to_string()), None, Some("b".to_string())]);
        assert_eq!(normalize_text(Some(&value)), "a；；b");
    }

    #[test]
    fn test_label_text_joins_with_plus() {
        let value = FieldValue::List(vec![Some("spect".to_string()), Some("spec".to_string())]);
        assert_eq!(label_text(Some(&value)), "spect + spec");
        assert_eq!(label_text(Some(&FieldValue::from(" ab- "))), "ab-");
        assert_eq!(label_text(None), "");
    }

    #[test]
    fn test_sort_key_case_insensitive() {
        assert_eq!(sort_key("Re"), sort_key("re"));
        assert!(sort_key("inter") < sort_key("Re"));
        assert!(sort_key("Re") < sort_key("sub"));
    }

    #[test]
    fn test_sort_key_accent_insensitive() {
        assert_eq!(sort_key("résumé"), sort_key("resume"));
        assert_eq!(sort_key("Éclair"), sort_key("eclair"));
    }
}
