//! Anchor resolution: turn textual landmarks into character ranges.
//!
//! An [`Anchor`] names a stretch of text by the literal substrings around it
//! ("after `Total:`", "between `(` and `)`") rather than by offsets. Every
//! mode is built on a single primitive, [`range_of`], which finds the
//! **first** occurrence of a substring. Later occurrences are never
//! considered.
//!
//! Resolution is total: a substring that is not present, or a two-anchor
//! combination that does not fit together, yields `None`.
//!
//! # Examples
//!
//! ```
//! use anchored_text::{Anchor, CharRange, resolve};
//!
//! let text = "Hello World Foo";
//! assert_eq!(resolve(text, Anchor::Exact("World")), Some(CharRange::new(6, 5)));
//! assert_eq!(resolve(text, Anchor::After("World ")), Some(CharRange::new(12, 3)));
//! assert_eq!(
//!     resolve(text, Anchor::Between { after: "Hello ", before: "Foo" }),
//!     Some(CharRange::new(6, 6)),
//! );
//! assert_eq!(resolve(text, Anchor::Exact("Bar")), None);
//! ```

use crate::text::CharRange;
use crate::unicode::{CharUnit, char_count, find_first};
use std::fmt;

/// A textual landmark that resolves to a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor<'a> {
    /// The first occurrence of the substring.
    Exact(&'a str),
    /// Everything strictly after the first occurrence.
    After(&'a str),
    /// Everything strictly before the first occurrence.
    Before(&'a str),
    /// The first occurrence and everything after it.
    From(&'a str),
    /// Everything up to and including the first occurrence.
    To(&'a str),
    /// The text after `after` up to the text before `before`.
    Between { after: &'a str, before: &'a str },
    /// The text from `from` through `to`, both included.
    FromTo { from: &'a str, to: &'a str },
}

impl Anchor<'_> {
    /// Short name of the mode, used in log output.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Exact(_) => "exact",
            Self::After(_) => "after",
            Self::Before(_) => "before",
            Self::From(_) => "from",
            Self::To(_) => "to",
            Self::Between { .. } => "between",
            Self::FromTo { .. } => "from_to",
        }
    }
}

impl fmt::Display for Anchor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(s) | Self::After(s) | Self::Before(s) | Self::From(s) | Self::To(s) => {
                write!(f, "{}({s:?})", self.mode())
            }
            Self::Between { after, before } => write!(f, "between({after:?}, {before:?})"),
            Self::FromTo { from, to } => write!(f, "from_to({from:?}, {to:?})"),
        }
    }
}

/// Options controlling anchor resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// The unit ranges are counted in.
    pub unit: CharUnit,
}

impl ResolveOptions {
    /// Set the character unit.
    #[must_use]
    pub const fn with_unit(mut self, unit: CharUnit) -> Self {
        self.unit = unit;
        self
    }
}

/// Resolve `anchor` against `text` with default options.
#[must_use]
pub fn resolve(text: &str, anchor: Anchor<'_>) -> Option<CharRange> {
    resolve_with(text, anchor, &ResolveOptions::default())
}

/// Resolve `anchor` against `text`.
#[must_use]
pub fn resolve_with(text: &str, anchor: Anchor<'_>, options: &ResolveOptions) -> Option<CharRange> {
    let range = match anchor {
        Anchor::Exact(s) => range_of(text, s, options),
        Anchor::After(s) => range_after(text, s, options),
        Anchor::Before(s) => range_before(text, s, options),
        Anchor::From(s) => range_from(text, s, options),
        Anchor::To(s) => range_to(text, s, options),
        Anchor::Between { after, before } => range_between(text, after, before, options),
        Anchor::FromTo { from, to } => range_from_to(text, from, to, options),
    };
    if range.is_none() {
        tracing::trace!(
            %anchor,
            text_len = char_count(text, options.unit),
            "anchor did not resolve"
        );
    }
    range
}

/// The first occurrence of `s`.
#[must_use]
pub fn range_of(text: &str, s: &str, options: &ResolveOptions) -> Option<CharRange> {
    find_first(text, s, options.unit)
}

/// From just past the first occurrence of `s` to the end of the text.
#[must_use]
pub fn range_after(text: &str, s: &str, options: &ResolveOptions) -> Option<CharRange> {
    let found = range_of(text, s, options)?;
    let location = found.end();
    Some(CharRange::new(
        location,
        char_count(text, options.unit) - location,
    ))
}

/// From the start of the text to just before the first occurrence of `s`.
#[must_use]
pub fn range_before(text: &str, s: &str, options: &ResolveOptions) -> Option<CharRange> {
    let found = range_of(text, s, options)?;
    Some(CharRange::new(0, found.location()))
}

/// From the first occurrence of `s` to the end of the text.
#[must_use]
pub fn range_from(text: &str, s: &str, options: &ResolveOptions) -> Option<CharRange> {
    let found = range_of(text, s, options)?;
    Some(CharRange::new(
        found.location(),
        char_count(text, options.unit) - found.location(),
    ))
}

/// From the start of the text through the end of the first occurrence of `s`.
#[must_use]
pub fn range_to(text: &str, s: &str, options: &ResolveOptions) -> Option<CharRange> {
    let found = range_of(text, s, options)?;
    Some(CharRange::new(0, found.end()))
}

/// The text after `after` and before `before`.
///
/// Combines [`range_after`] and [`range_before`]. The pair is accepted only
/// when the after-range's location is less than the before-range's
/// *length*; otherwise the result is `None`.
#[must_use]
pub fn range_between(
    text: &str,
    after: &str,
    before: &str,
    options: &ResolveOptions,
) -> Option<CharRange> {
    let r_after = range_after(text, after, options)?;
    let r_before = range_before(text, before, options)?;
    combine(r_after, r_before)
}

/// The text from `from` through `to`, both included.
///
/// Combines [`range_from`] and [`range_to`] with the same acceptance rule as
/// [`range_between`].
#[must_use]
pub fn range_from_to(
    text: &str,
    from: &str,
    to: &str,
    options: &ResolveOptions,
) -> Option<CharRange> {
    let r_from = range_from(text, from, options)?;
    let r_to = range_to(text, to, options)?;
    combine(r_from, r_to)
}

// `tail` runs to the end of the text and `head` starts at 0, so comparing
// the tail's location with the head's length is comparing it with the
// head's end.
fn combine(tail: CharRange, head: CharRange) -> Option<CharRange> {
    if tail.location() < head.length() {
        Some(CharRange::new(
            tail.location(),
            head.length() - tail.location(),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Hello World Foo";

    #[test]
    fn test_single_anchor_modes() {
        assert_eq!(resolve(TEXT, Anchor::Exact("World")), Some(CharRange::new(6, 5)));
        assert_eq!(resolve(TEXT, Anchor::After("World")), Some(CharRange::new(11, 4)));
        assert_eq!(resolve(TEXT, Anchor::Before("World")), Some(CharRange::new(0, 6)));
        assert_eq!(resolve(TEXT, Anchor::From("World")), Some(CharRange::new(6, 9)));
        assert_eq!(resolve(TEXT, Anchor::To("World")), Some(CharRange::new(0, 11)));
    }

    #[test]
    fn test_between_literal_rule() {
        let range = resolve(
            TEXT,
            Anchor::Between {
                after: "Hello ",
                before: "Foo",
            },
        );
        assert_eq!(range, Some(CharRange::new(6, 6)));
    }

    #[test]
    fn test_between_rejects_reversed_anchors() {
        let range = resolve(
            TEXT,
            Anchor::Between {
                after: "Foo",
                before: "Hello",
            },
        );
        assert_eq!(range, None);
    }

    #[test]
    fn test_between_adjacent_anchors_is_none() {
        // Nothing sits between "Hello" and " World".
        let range = resolve(
            TEXT,
            Anchor::Between {
                after: "Hello",
                before: " World",
            },
        );
        assert_eq!(range, None);
    }

    #[test]
    fn test_from_to() {
        let range = resolve(
            TEXT,
            Anchor::FromTo {
                from: "World",
                to: "Foo",
            },
        );
        assert_eq!(range, Some(CharRange::new(6, 9)));

        let reversed = resolve(
            TEXT,
            Anchor::FromTo {
                from: "Foo",
                to: "Hello",
            },
        );
        assert_eq!(reversed, None);
    }

    #[test]
    fn test_from_to_same_anchor_is_exact() {
        let range = resolve(
            TEXT,
            Anchor::FromTo {
                from: "World",
                to: "World",
            },
        );
        assert_eq!(range, resolve(TEXT, Anchor::Exact("World")));
    }

    #[test]
    fn test_missing_anchor_in_pair() {
        assert_eq!(
            resolve(
                TEXT,
                Anchor::Between {
                    after: "Hello",
                    before: "Bar"
                }
            ),
            None
        );
        assert_eq!(
            resolve(
                TEXT,
                Anchor::FromTo {
                    from: "Bar",
                    to: "Foo"
                }
            ),
            None
        );
    }

    #[test]
    fn test_anchor_at_edges() {
        assert_eq!(resolve(TEXT, Anchor::Before("Hello")), Some(CharRange::new(0, 0)));
        assert_eq!(resolve(TEXT, Anchor::After("Foo")), Some(CharRange::new(15, 0)));
    }

    #[test]
    fn test_scalar_unit_option() {
        let text = "cafe\u{301} au lait";
        let graphemes = ResolveOptions::default();
        let scalars = ResolveOptions::default().with_unit(CharUnit::Scalar);
        assert_eq!(range_after(text, "caf", &graphemes), Some(CharRange::new(3, 9)));
        assert_eq!(range_after(text, "caf", &scalars), Some(CharRange::new(3, 10)));
    }

    #[test]
    fn test_anchor_display() {
        assert_eq!(Anchor::After("x").to_string(), "after(\"x\")");
        assert_eq!(
            Anchor::Between {
                after: "a",
                before: "b"
            }
            .to_string(),
            "between(\"a\", \"b\")"
        );
    }
}
