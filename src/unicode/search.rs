//! First-occurrence substring search measured in character units.

use crate::text::CharRange;
use crate::unicode::grapheme::{CharUnit, unit_boundaries};

/// Find the first occurrence of `needle` in `text`.
///
/// The match is literal and case-sensitive. Only matches whose start and end
/// both sit on character boundaries count; a byte match that would split a
/// grapheme cluster is skipped and the scan continues after it.
///
/// An empty `needle` never matches.
#[must_use]
pub fn find_first(text: &str, needle: &str, unit: CharUnit) -> Option<CharRange> {
    if needle.is_empty() || needle.len() > text.len() {
        return None;
    }

    let bounds = unit_boundaries(text, unit);
    let mut from = 0;
    while let Some(pos) = text[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        if let (Ok(loc), Ok(end_idx)) = (bounds.binary_search(&start), bounds.binary_search(&end))
        {
            return Some(CharRange::new(loc, end_idx - loc));
        }
        // `start` is a char boundary because `find` only reports those.
        let step = text[start..].chars().next().map_or(1, char::len_utf8);
        from = start + step;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ascii() {
        let r = find_first("Hello World", "World", CharUnit::Grapheme).unwrap();
        assert_eq!(r, CharRange::new(6, 5));
    }

    #[test]
    fn test_find_first_occurrence_only() {
        let r = find_first("abcabc", "bc", CharUnit::Grapheme).unwrap();
        assert_eq!(r, CharRange::new(1, 2));
    }

    #[test]
    fn test_find_is_case_sensitive() {
        assert_eq!(find_first("Hello", "hello", CharUnit::Grapheme), None);
    }

    #[test]
    fn test_find_empty() {
        assert_eq!(find_first("Hello", "", CharUnit::Grapheme), None);
        assert_eq!(find_first("", "a", CharUnit::Grapheme), None);
        assert_eq!(find_first("", "", CharUnit::Scalar), None);
    }

    #[test]
    fn test_find_reports_char_offsets() {
        // "ü" and "ß" are two bytes each.
        let r = find_first("Grüße aus Köln", "aus", CharUnit::Scalar).unwrap();
        assert_eq!(r, CharRange::new(6, 3));
    }

    #[test]
    fn test_find_skips_split_grapheme() {
        // The first "e" is the base of "e\u{301}"; matching it alone would
        // split the cluster, so the plain "e" later on wins.
        let s = "cafe\u{301} fee";
        let r = find_first(s, "e", CharUnit::Grapheme).unwrap();
        assert_eq!(r, CharRange::new(6, 1));

        // Counting scalars, the base letter is a character of its own.
        let r = find_first(s, "e", CharUnit::Scalar).unwrap();
        assert_eq!(r, CharRange::new(3, 1));
    }

    #[test]
    fn test_find_whole_cluster() {
        let s = "a👍🏽b";
        let r = find_first(s, "👍🏽", CharUnit::Grapheme).unwrap();
        assert_eq!(r, CharRange::new(1, 1));
        let r = find_first(s, "👍🏽", CharUnit::Scalar).unwrap();
        assert_eq!(r, CharRange::new(1, 2));
    }
}
