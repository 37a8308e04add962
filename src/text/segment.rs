//! Attribute spans over character ranges.

use crate::color::Rgba;
use crate::font::Font;
use crate::style::{AttributeKind, AttributeValue};
use crate::text::range::CharRange;

/// One attribute value applied over a character range.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeSpan<C = Rgba, F = Font> {
    /// Character range in the source text.
    pub range: CharRange,
    /// Value applied over the range.
    pub value: AttributeValue<C, F>,
}

impl<C, F> AttributeSpan<C, F> {
    /// Create a new span.
    #[must_use]
    pub fn new(range: CharRange, value: AttributeValue<C, F>) -> Self {
        Self { range, value }
    }

    /// The attribute slot this span fills.
    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        self.value.kind()
    }

    /// Check if this span overlaps with another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.range.intersects(other.range)
    }

    /// Check if this span contains a position.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        self.range.contains(pos)
    }

    /// Get the length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.length()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The parts of this span left over after cutting `cut` out of it.
    ///
    /// Returns up to two spans: the piece before `cut` and the piece after.
    pub(crate) fn split_around(&self, cut: CharRange) -> (Option<Self>, Option<Self>)
    where
        C: Clone,
        F: Clone,
    {
        if !self.range.intersects(cut) {
            return (Some(self.clone()), None);
        }
        let before = CharRange::from_bounds(self.range.location(), cut.location())
            .filter(|r| !r.is_empty())
            .map(|r| Self::new(r, self.value.clone()));
        let after = CharRange::from_bounds(cut.end(), self.range.end())
            .filter(|r| !r.is_empty())
            .map(|r| Self::new(r, self.value.clone()));
        (before, after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(location: usize, length: usize) -> AttributeSpan {
        AttributeSpan::new(
            CharRange::new(location, length),
            AttributeValue::ForegroundColor(Rgba::RED),
        )
    }

    #[test]
    fn test_span_overlap() {
        let a = span(0, 10);
        let b = span(5, 10);
        let c = span(10, 10);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // adjacent, not overlapping
    }

    #[test]
    fn test_span_contains() {
        let s = span(5, 5);
        assert!(!s.contains(4));
        assert!(s.contains(5));
        assert!(s.contains(9));
        assert!(!s.contains(10));
        assert_eq!(s.len(), 5);
        assert_eq!(s.kind(), AttributeKind::ForegroundColor);
    }

    #[test]
    fn test_split_around_middle() {
        let (before, after) = span(0, 10).split_around(CharRange::new(3, 4));
        assert_eq!(before.unwrap().range, CharRange::new(0, 3));
        assert_eq!(after.unwrap().range, CharRange::new(7, 3));
    }

    #[test]
    fn test_split_around_covering_cut() {
        let (before, after) = span(2, 3).split_around(CharRange::new(0, 10));
        assert!(before.is_none());
        assert!(after.is_none());
    }

    #[test]
    fn test_split_around_disjoint_keeps_span() {
        let (before, after) = span(0, 3).split_around(CharRange::new(5, 2));
        assert_eq!(before, Some(span(0, 3)));
        assert!(after.is_none());
    }
}
