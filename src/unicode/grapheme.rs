//! Character units and the mapping between character and byte offsets.

use crate::text::CharRange;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// What counts as one "character" in range arithmetic.
///
/// Every [`CharRange`] is measured in one of these units. Byte offsets never
/// leak out of this module, so multi-byte text cannot be split mid-character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CharUnit {
    /// Extended grapheme clusters (user-perceived characters).
    #[default]
    Grapheme,
    /// Unicode scalar values (Rust `char`s).
    Scalar,
}

/// Count the characters of `text` in the given unit.
#[must_use]
pub fn char_count(text: &str, unit: CharUnit) -> usize {
    match unit {
        CharUnit::Grapheme => text.graphemes(true).count(),
        CharUnit::Scalar => text.chars().count(),
    }
}

/// Byte offsets of every character start, followed by `text.len()`.
///
/// The result always has `char_count(text, unit) + 1` entries, so entry `i`
/// is the byte offset of character index `i` for every `i <= count`.
#[must_use]
pub fn unit_boundaries(text: &str, unit: CharUnit) -> Vec<usize> {
    let mut bounds: Vec<usize> = match unit {
        CharUnit::Grapheme => text.grapheme_indices(true).map(|(i, _)| i).collect(),
        CharUnit::Scalar => text.char_indices().map(|(i, _)| i).collect(),
    };
    bounds.push(text.len());
    bounds
}

/// Map a character range onto a byte range of `text`.
///
/// Returns `None` when the range reaches past the end of the text.
#[must_use]
pub fn byte_range(text: &str, range: CharRange, unit: CharUnit) -> Option<Range<usize>> {
    let bounds = unit_boundaries(text, unit);
    let start = *bounds.get(range.location())?;
    let end = *bounds.get(range.end())?;
    Some(start..end)
}
