//! Text collation for title ordering
//!
//! Title sorting must follow conventional text collation rather than raw
//! byte order: case and diacritics must not dominate, and punctuation must
//! not split otherwise-adjacent titles. Collation keys are built the same
//! way titles are normalized for comparison elsewhere in the suite: NFKD
//! decomposition, combining marks dropped, lowercased, with runs of
//! non-alphanumeric characters collapsed to single separators.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Build a collation key for a string.
pub(crate) fn collation_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    let mut prev_was_sep = true;

    for c in s.nfkd().filter(|c| !is_combining_mark(*c)) {
        if c.is_alphanumeric() {
            key.extend(c.to_lowercase());
            prev_was_sep = false;
        } else if !prev_was_sep {
            key.push(' ');
            prev_was_sep = true;
        }
    }

    key.truncate(key.trim_end().len());
    key
}

/// Compare two strings by collation key, falling back to raw byte order so
/// the comparison is a total order over distinct strings.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("École", "ecole"; "strips diacritics")]
    #[test_case("Über Alles", "uber alles"; "lowercases")]
    #[test_case("Data-Driven: Methods!", "data driven methods"; "collapses punctuation")]
    #[test_case("  spaced   out  ", "spaced out"; "collapses whitespace")]
    fn collation_keys(input: &str, expected: &str) {
        assert_eq!(collation_key(input), expected);
    }

    #[test]
    fn compare_is_case_insensitive() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn compare_ignores_leading_diacritics() {
        // Raw byte order would put "École" after "Studio"
        assert_eq!(compare_text("École", "Studio"), Ordering::Less);
    }

    #[test]
    fn compare_distinct_strings_never_equal() {
        assert_ne!(compare_text("Éclair", "eclair"), Ordering::Equal);
        assert_eq!(compare_text("same", "same"), Ordering::Equal);
    }
}
