//! Text with attribute spans layered over character ranges.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::font::Font;
use crate::style::{AttributeKind, AttributeValue, StyleValue};
use crate::text::range::CharRange;
use crate::text::segment::AttributeSpan;
use crate::unicode::{CharUnit, byte_range, char_count, unit_boundaries};

/// A block of text with attribute values applied to character ranges.
///
/// Each [`AttributeKind`] is an independent slot: spans of the same kind
/// never overlap, while spans of different kinds overlap freely. Setting a
/// value overwrites that kind over the range only; everything outside the
/// range is kept as it was.
///
/// # Examples
///
/// ```
/// use anchored_text::{AttributeKind, AttributeValue, CharRange, Rgba, StyledText};
///
/// let mut text: StyledText = StyledText::new("Hello World");
/// text.set_attribute(CharRange::new(0, 5), AttributeValue::ForegroundColor(Rgba::RED))
///     .unwrap();
///
/// let at = text.attribute_at(1, AttributeKind::ForegroundColor).unwrap();
/// assert_eq!(at.foreground_color(), Some(&Rgba::RED));
/// assert!(text.attribute_at(7, AttributeKind::ForegroundColor).is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StyledText<C = Rgba, F = Font> {
    text: String,
    unit: CharUnit,
    len: usize,
    spans: Vec<AttributeSpan<C, F>>,
}

/// A maximal stretch of text whose attribute set does not change.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<'a, C = Rgba, F = Font> {
    /// Character range of the run.
    pub range: CharRange,
    /// The text covered by the run.
    pub text: &'a str,
    /// Every attribute active over the run, ordered by kind.
    pub attributes: Vec<&'a AttributeValue<C, F>>,
}

impl<C: StyleValue, F: StyleValue> StyledText<C, F> {
    /// Create styled text with no attributes, counting grapheme clusters.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_unit(text, CharUnit::default())
    }

    /// Create styled text with no attributes, counting in `unit`.
    pub fn with_unit(text: impl Into<String>, unit: CharUnit) -> Self {
        let text = text.into();
        let len = char_count(&text, unit);
        Self {
            text,
            unit,
            len,
            spans: Vec::new(),
        }
    }

    /// Borrow the plain text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The unit all ranges over this text are measured in.
    #[must_use]
    pub fn unit(&self) -> CharUnit {
        self.unit
    }

    /// Length of the text in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The range covering the whole text.
    #[must_use]
    pub fn full_range(&self) -> CharRange {
        CharRange::full(self.len)
    }

    /// Returns `true` if any attribute span is applied.
    #[must_use]
    pub fn has_attributes(&self) -> bool {
        !self.spans.is_empty()
    }

    /// All spans, ordered by location and then kind.
    #[must_use]
    pub fn spans(&self) -> &[AttributeSpan<C, F>] {
        &self.spans
    }

    /// Spans of one kind, in text order.
    pub fn spans_of(&self, kind: AttributeKind) -> impl Iterator<Item = &AttributeSpan<C, F>> {
        self.spans.iter().filter(move |span| span.kind() == kind)
    }

    /// The text covered by `range`, or `None` if it is out of bounds.
    #[must_use]
    pub fn substring(&self, range: CharRange) -> Option<&str> {
        byte_range(&self.text, range, self.unit).map(|bytes| &self.text[bytes])
    }

    /// Set `value` over `range`, replacing any value of the same kind there.
    pub fn set_attribute(&mut self, range: CharRange, value: AttributeValue<C, F>) -> Result<()> {
        self.check_range(range)?;
        if range.is_empty() {
            return Ok(());
        }
        self.clear_kind(range, value.kind());
        self.spans.push(AttributeSpan::new(range, value));
        self.normalize();
        Ok(())
    }

    /// Remove any value of `kind` over `range`. Other kinds are untouched.
    pub fn remove_attribute(&mut self, range: CharRange, kind: AttributeKind) -> Result<()> {
        self.check_range(range)?;
        if range.is_empty() {
            return Ok(());
        }
        self.clear_kind(range, kind);
        self.normalize();
        Ok(())
    }

    /// The value of `kind` at character `index`, if any.
    #[must_use]
    pub fn attribute_at(&self, index: usize, kind: AttributeKind) -> Option<&AttributeValue<C, F>> {
        self.spans
            .iter()
            .find(|span| span.kind() == kind && span.contains(index))
            .map(|span| &span.value)
    }

    /// Every value active at character `index`.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &AttributeValue<C, F>> {
        self.spans
            .iter()
            .filter(move |span| span.contains(index))
            .map(|span| &span.value)
    }

    /// Split the text into maximal runs of constant attributes.
    ///
    /// Runs cover the whole text in order, including unstyled stretches
    /// (which have an empty attribute list). Empty text has no runs.
    #[must_use]
    pub fn runs(&self) -> Vec<Run<'_, C, F>> {
        let mut cuts = Vec::with_capacity(2 + self.spans.len() * 2);
        cuts.push(0);
        cuts.push(self.len);
        for span in &self.spans {
            cuts.push(span.range.location());
            cuts.push(span.range.end());
        }
        cuts.sort_unstable();
        cuts.dedup();

        let bytes = unit_boundaries(&self.text, self.unit);
        cuts.windows(2)
            .map(|pair| {
                let (start, end) = (pair[0], pair[1]);
                let mut attributes: Vec<_> = self
                    .spans
                    .iter()
                    .filter(|span| span.contains(start))
                    .map(|span| &span.value)
                    .collect();
                attributes.sort_by_key(|value| value.kind());
                Run {
                    range: CharRange::new(start, end - start),
                    text: &self.text[bytes[start]..bytes[end]],
                    attributes,
                }
            })
            .collect()
    }

    fn check_range(&self, range: CharRange) -> Result<()> {
        if range.end() > self.len {
            return Err(Error::RangeOutOfBounds {
                location: range.location(),
                length: range.length(),
                len: self.len,
            });
        }
        Ok(())
    }

    fn clear_kind(&mut self, range: CharRange, kind: AttributeKind) {
        let mut kept = Vec::with_capacity(self.spans.len() + 1);
        for span in self.spans.drain(..) {
            if span.kind() != kind || !span.range.intersects(range) {
                kept.push(span);
                continue;
            }
            let (before, after) = span.split_around(range);
            kept.extend(before);
            kept.extend(after);
        }
        self.spans = kept;
    }

    /// Merge touching spans of equal value, then restore text order.
    fn normalize(&mut self) {
        self.spans
            .sort_by_key(|span| (span.kind(), span.range.location()));
        let mut merged: Vec<AttributeSpan<C, F>> = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if let Some(last) = merged.last_mut() {
                if last.value == span.value && last.range.end() == span.range.location() {
                    last.range = CharRange::new(last.range.location(), last.len() + span.len());
                    continue;
                }
            }
            merged.push(span);
        }
        merged.sort_by_key(|span| (span.range.location(), span.kind()));
        self.spans = merged;
    }
}

impl<C: StyleValue, F: StyleValue> From<&str> for StyledText<C, F> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<C: StyleValue, F: StyleValue> From<String> for StyledText<C, F> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
