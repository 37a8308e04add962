//! Character ranges.

use std::fmt;
use std::ops::Range;

/// A half-open character span `[location, location + length)`.
///
/// Offsets count characters in some [`CharUnit`](crate::unicode::CharUnit),
/// not bytes. "No match" is expressed as `Option<CharRange>::None`, so a
/// range found at location 0 is never confused with a miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharRange {
    location: usize,
    length: usize,
}

impl CharRange {
    /// Create a range from a start location and a length.
    #[must_use]
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// The range covering a whole text of `len` characters.
    #[must_use]
    pub const fn full(len: usize) -> Self {
        Self::new(0, len)
    }

    /// Create a range from start and end offsets.
    ///
    /// Returns `None` if `end < start`.
    #[must_use]
    pub const fn from_bounds(start: usize, end: usize) -> Option<Self> {
        if end < start {
            None
        } else {
            Some(Self::new(start, end - start))
        }
    }

    /// The start offset.
    #[must_use]
    pub const fn location(self) -> usize {
        self.location
    }

    /// The number of characters covered.
    #[must_use]
    pub const fn length(self) -> usize {
        self.length
    }

    /// The end offset (exclusive).
    #[must_use]
    pub const fn end(self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Check if the range covers no characters.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// Check if this range contains a position.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        self.location <= index && index < self.end()
    }

    /// Check if this range shares at least one character with another.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.location < other.end() && other.location < self.end()
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    pub const fn as_range(self) -> Range<usize> {
        self.location..self.end()
    }
}

impl From<CharRange> for Range<usize> {
    fn from(value: CharRange) -> Self {
        value.as_range()
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.location, self.end())
    }
}
