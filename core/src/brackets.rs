//! Bracket-group extraction and classification for dish lines.
//!
//! A dish line such as `계란국 (추가) (1.5.6.18)` carries its annotations in
//! parenthesized groups. These helpers pull the groups out, decide which one
//! (if any) is the allergen code, and produce the bare display name.

use regex::Regex;
use std::sync::LazyLock;

// SAFETY: These regexes are compile-time constants and are validated by tests.
static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("static regex must compile"));
static GROUP_WITH_LEADING_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)").expect("static regex must compile"));

/// Bracket groups of one line, split into the code group and the options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BracketSplit<'a> {
    pub code: Option<&'a str>,
    pub options: Vec<&'a str>,
}

/// Returns the contents of every `(...)` group in `line`, left to right.
///
/// Matching is non-greedy, so `A (x) (y)` yields `["x", "y"]`. An unmatched
/// parenthesis contributes nothing.
///
/// # Examples
///
/// ```
/// use schoolmeal_core::extract_groups;
///
/// assert_eq!(extract_groups("A (x) (y)"), vec!["x", "y"]);
/// assert!(extract_groups("김치 (5").is_empty());
/// ```
pub fn extract_groups(line: &str) -> Vec<&str> {
    GROUP_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Returns `true` if `group` is one or more ASCII digits and periods and
/// nothing else (e.g. `1.5.6.18`, `13`, `5.`).
pub fn is_code_group(group: &str) -> bool {
    !group.is_empty() && group.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

/// Splits extracted groups into the code and the options.
///
/// Only the last group is a code candidate. When it qualifies, the groups
/// before it become options; otherwise every group is an option.
///
/// # Examples
///
/// ```
/// use schoolmeal_core::classify_last_group;
///
/// let split = classify_last_group(&["추가", "1.5.6.18"]);
/// assert_eq!(split.code, Some("1.5.6.18"));
/// assert_eq!(split.options, vec!["추가"]);
///
/// let split = classify_last_group(&["1.2", "매운맛"]);
/// assert_eq!(split.code, None);
/// assert_eq!(split.options, vec!["1.2", "매운맛"]);
/// ```
pub fn classify_last_group<'a>(groups: &[&'a str]) -> BracketSplit<'a> {
    match groups.split_last() {
        Some((last, rest)) if is_code_group(last) => BracketSplit {
            code: Some(*last),
            options: rest.to_vec(),
        },
        _ => BracketSplit {
            code: None,
            options: groups.to_vec(),
        },
    }
}

/// Removes every bracket group (and the whitespace just before it) from
/// `line`, drops any leftover unmatched parenthesis, and collapses runs of
/// whitespace.
///
/// # Examples
///
/// ```
/// use schoolmeal_core::strip_groups;
///
/// assert_eq!(strip_groups("계란국 (추가) (1.5.6.18)"), "계란국");
/// assert_eq!(strip_groups("김치 (5"), "김치 5");
/// ```
pub fn strip_groups(line: &str) -> String {
    let removed = GROUP_WITH_LEADING_SPACE_RE.replace_all(line, "");
    removed
        .replace(['(', ')'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_groups_is_non_greedy() {
        assert_eq!(extract_groups("A (x) (y)"), vec!["x", "y"]);
        assert_eq!(extract_groups("A(x)B(y)C"), vec!["x", "y"]);
    }

    #[test]
    fn test_extract_groups_without_brackets() {
        assert!(extract_groups("백미밥").is_empty());
        assert!(extract_groups("").is_empty());
    }

    #[test]
    fn test_extract_groups_nested_takes_shortest_span() {
        // Content runs to the first closing paren.
        assert_eq!(extract_groups("떡(쌀(국산))"), vec!["쌀(국산"]);
    }

    #[test]
    fn test_extract_groups_keeps_empty_group() {
        assert_eq!(extract_groups("밥 ()"), vec![""]);
    }

    #[test]
    fn test_is_code_group() {
        assert!(is_code_group("1.5.6.18"));
        assert!(is_code_group("13"));
        assert!(is_code_group("5."));
        assert!(is_code_group("."));
        assert!(!is_code_group(""));
        assert!(!is_code_group("1,2"));
        assert!(!is_code_group("추가"));
        assert!(!is_code_group(" 13"));
        assert!(!is_code_group("１３"));
    }

    #[test]
    fn test_classify_trailing_code() {
        let split = classify_last_group(&["추가", "1.5.6.18"]);
        assert_eq!(split.code, Some("1.5.6.18"));
        assert_eq!(split.options, vec!["추가"]);
    }

    #[test]
    fn test_classify_code_only_when_last() {
        let split = classify_last_group(&["5.6", "추가"]);
        assert_eq!(split.code, None);
        assert_eq!(split.options, vec!["5.6", "추가"]);
    }

    #[test]
    fn test_classify_no_groups() {
        let split = classify_last_group(&[]);
        assert_eq!(split, BracketSplit::default());
    }

    #[test]
    fn test_classify_empty_last_group_is_option() {
        let split = classify_last_group(&[""]);
        assert_eq!(split.code, None);
        assert_eq!(split.options, vec![""]);
    }

    #[test]
    fn test_strip_groups_removes_code_and_options() {
        assert_eq!(strip_groups("계란국 (추가) (1.5.6.18)"), "계란국");
        assert_eq!(strip_groups("백미밥"), "백미밥");
    }

    #[test]
    fn test_strip_groups_keeps_text_between_groups() {
        assert_eq!(strip_groups("A (x) B (1.2)"), "A B");
        assert_eq!(strip_groups("A(x)B"), "AB");
    }

    #[test]
    fn test_strip_groups_never_leaves_parens() {
        for line in ["김치 (5", "김치 5)", "떡(쌀(국산))", ")(", "((a)"] {
            let name = strip_groups(line);
            assert!(
                !name.contains('(') && !name.contains(')'),
                "{line:?} -> {name:?}"
            );
        }
    }
}
