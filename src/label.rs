//! Anchor-addressed styling for text-display widgets.
//!
//! A host widget implements [`TextHost`] (current plain text, current styled
//! text, a setter). Every host then gets [`AnchoredStyle`], which pairs any
//! [`StyleAttribute`] with any [`Anchor`]:
//!
//! 1. resolve the anchor against the host's plain text,
//! 2. apply the attribute to a working copy of the host's styled text (or
//!    of its plain text when it has none yet),
//! 3. store the result back on the host.
//!
//! A miss at step 1 leaves the host untouched.
//!
//! # Examples
//!
//! ```
//! use anchored_text::{Anchor, AnchoredStyle, AttributeKind, Label, Rgba, TextHost};
//!
//! let mut label: Label = Label::new("Price: 12 EUR");
//! assert!(label.set_text_color(Rgba::RED, Anchor::Between { after: "Price: ", before: " EUR" }));
//! assert!(!label.set_text_color(Rgba::RED, Anchor::Exact("USD")));
//!
//! let styled = label.styled_text().unwrap();
//! let color = styled.attribute_at(7, AttributeKind::ForegroundColor).unwrap();
//! assert_eq!(color.foreground_color(), Some(&Rgba::RED));
//! ```

use crate::apply::apply_style;
use crate::color::Rgba;
use crate::font::Font;
use crate::resolve::{Anchor, ResolveOptions, resolve_with};
use crate::style::{StyleAttribute, StyleValue};
use crate::text::{CharRange, StyledText};
use crate::unicode::{CharUnit, char_count};

/// A text-display widget that can hold styled text.
///
/// When `styled_text` returns `Some`, its text must equal `plain_text`.
pub trait TextHost {
    /// Host color type.
    type Color: StyleValue;
    /// Host font type.
    type Font: StyleValue;

    /// The text currently displayed.
    fn plain_text(&self) -> &str;

    /// The styled text currently displayed, if any has been set.
    fn styled_text(&self) -> Option<&StyledText<Self::Color, Self::Font>>;

    /// Replace the displayed styled text.
    fn set_styled_text(&mut self, styled: StyledText<Self::Color, Self::Font>);

    /// The unit ranges over this host's text are counted in.
    fn char_unit(&self) -> CharUnit {
        self.styled_text()
            .map_or_else(CharUnit::default, StyledText::unit)
    }
}

/// Style a [`TextHost`] by anchor.
///
/// Every method returns `true` when the host's styled text was replaced and
/// `false` when the call was a no-op.
pub trait AnchoredStyle: TextHost {
    /// The range covering all of the host's text.
    fn full_range(&self) -> CharRange {
        CharRange::full(char_count(self.plain_text(), self.char_unit()))
    }

    /// Resolve `anchor` against the host's plain text.
    fn resolve_anchor(&self, anchor: Anchor<'_>) -> Option<CharRange> {
        let options = ResolveOptions::default().with_unit(self.char_unit());
        resolve_with(self.plain_text(), anchor, &options)
    }

    /// Apply `attribute` over an explicit range.
    fn apply_in_range(
        &mut self,
        range: Option<CharRange>,
        attribute: StyleAttribute<Self::Color, Self::Font>,
    ) -> bool {
        let Some(range) = range else {
            tracing::debug!(attribute = attribute.name(), "no range, host left unchanged");
            return false;
        };
        let base = match self.styled_text() {
            Some(styled) => styled.clone(),
            None => StyledText::with_unit(self.plain_text(), self.char_unit()),
        };
        if range.end() > base.len() {
            tracing::warn!(
                attribute = attribute.name(),
                %range,
                len = base.len(),
                "range exceeds host text, host left unchanged"
            );
            return false;
        }
        let styled = apply_style(base, Some(range), attribute);
        self.set_styled_text(styled);
        true
    }

    /// Resolve `anchor` and apply `attribute` over the result.
    fn apply_at(
        &mut self,
        attribute: StyleAttribute<Self::Color, Self::Font>,
        anchor: Anchor<'_>,
    ) -> bool {
        let range = self.resolve_anchor(anchor);
        self.apply_in_range(range, attribute)
    }

    /// Set the foreground color over `anchor`.
    fn set_text_color(&mut self, color: Self::Color, anchor: Anchor<'_>) -> bool {
        self.apply_at(StyleAttribute::ForegroundColor(color), anchor)
    }

    /// Set the font over `anchor`.
    fn set_font(&mut self, font: Self::Font, anchor: Anchor<'_>) -> bool {
        self.apply_at(StyleAttribute::Font(font), anchor)
    }

    /// Underline the whole of `anchor` in `color`.
    fn set_underline(&mut self, color: Self::Color, anchor: Anchor<'_>) -> bool {
        self.set_underline_by_word(color, false, anchor)
    }

    /// Underline `anchor` in `color`, word by word when `by_word` is set.
    fn set_underline_by_word(
        &mut self,
        color: Self::Color,
        by_word: bool,
        anchor: Anchor<'_>,
    ) -> bool {
        self.apply_at(StyleAttribute::Underline { color, by_word }, anchor)
    }

    /// Remove the underline style over `anchor`.
    fn remove_underline(&mut self, anchor: Anchor<'_>) -> bool {
        self.apply_at(StyleAttribute::NoUnderline, anchor)
    }
}

impl<H: TextHost + ?Sized> AnchoredStyle for H {}

/// A minimal in-memory text host.
///
/// Assigning new plain text drops any styling, the same way a label widget
/// resets its attributed text when its plain text is replaced.
#[derive(Clone, Debug, PartialEq)]
pub struct Label<C = Rgba, F = Font> {
    text: String,
    unit: CharUnit,
    styled: Option<StyledText<C, F>>,
}

impl<C: StyleValue, F: StyleValue> Label<C, F> {
    /// Create an unstyled label counting grapheme clusters.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_unit(text, CharUnit::default())
    }

    /// Create an unstyled label counting in `unit`.
    pub fn with_unit(text: impl Into<String>, unit: CharUnit) -> Self {
        Self {
            text: text.into(),
            unit,
            styled: None,
        }
    }

    /// The displayed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and drop all styling.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.styled = None;
    }

    /// Drop all styling, keeping the text.
    pub fn clear_styling(&mut self) {
        self.styled = None;
    }
}

impl<C: StyleValue, F: StyleValue> TextHost for Label<C, F> {
    type Color = C;
    type Font = F;

    fn plain_text(&self) -> &str {
        &self.text
    }

    fn styled_text(&self) -> Option<&StyledText<C, F>> {
        self.styled.as_ref()
    }

    fn set_styled_text(&mut self, styled: StyledText<C, F>) {
        if styled.text() != self.text {
            self.text = styled.text().to_string();
        }
        self.unit = styled.unit();
        self.styled = Some(styled);
    }

    fn char_unit(&self) -> CharUnit {
        self.unit
    }
}
