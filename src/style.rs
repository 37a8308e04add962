//! Style directives and the attribute values they store.
//!
//! This module provides the types that describe *what* gets applied over a
//! resolved range:
//!
//! - [`StyleAttribute`]: one styling directive (color, font, underline, no underline)
//! - [`AttributeKind`]: the independent attribute slots a character can carry
//! - [`AttributeValue`]: a value stored in one of those slots
//! - [`UnderlineStyle`]: bitflags for the underline pattern
//!
//! Attribute kinds never clobber each other: setting a font over a range
//! leaves its foreground color alone, and so on.
//!
//! # Examples
//!
//! ```
//! use anchored_text::{AttributeKind, Rgba, StyleAttribute, UnderlineStyle};
//!
//! let underline: StyleAttribute = StyleAttribute::underline_by_word(Rgba::BLUE);
//! let values = underline.values();
//! assert_eq!(values[0].kind(), AttributeKind::UnderlineStyle);
//! assert_eq!(
//!     values[0].underline_style(),
//!     Some(UnderlineStyle::SINGLE | UnderlineStyle::BY_WORD)
//! );
//! ```

use crate::color::Rgba;
use crate::font::Font;
use bitflags::bitflags;
use std::fmt::Debug;

/// Bounds shared by host-supplied color and font values.
///
/// Values are cloned into spans and compared to coalesce neighbours; they are
/// otherwise passed through untouched.
pub trait StyleValue: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> StyleValue for T {}

bitflags! {
    /// Underline pattern flags.
    ///
    /// Raw values match the platform underline style constants, so they can
    /// be handed to a native text system unchanged.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct UnderlineStyle: u32 {
        /// A single thin line.
        const SINGLE  = 0x01;
        /// Draw under words only, skipping whitespace.
        const BY_WORD = 0x8000;
    }
}

/// One styling directive, applied over one range.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleAttribute<C = Rgba, F = Font> {
    /// Set the foreground color.
    ForegroundColor(C),
    /// Set the font.
    Font(F),
    /// Set a single underline in `color`, optionally drawn word by word.
    Underline { color: C, by_word: bool },
    /// Remove the underline style. Any underline color is left in place.
    NoUnderline,
}

impl<C: StyleValue, F: StyleValue> StyleAttribute<C, F> {
    /// Underline the whole range.
    #[must_use]
    pub fn underline(color: C) -> Self {
        Self::Underline {
            color,
            by_word: false,
        }
    }

    /// Underline word by word.
    #[must_use]
    pub fn underline_by_word(color: C) -> Self {
        Self::Underline {
            color,
            by_word: true,
        }
    }

    /// Short name used in log output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ForegroundColor(_) => "foreground_color",
            Self::Font(_) => "font",
            Self::Underline { .. } => "underline",
            Self::NoUnderline => "no_underline",
        }
    }

    /// The attribute values this directive writes.
    ///
    /// Empty for [`StyleAttribute::NoUnderline`], which only removes.
    #[must_use]
    pub fn values(&self) -> Vec<AttributeValue<C, F>> {
        match self {
            Self::ForegroundColor(color) => vec![AttributeValue::ForegroundColor(color.clone())],
            Self::Font(font) => vec![AttributeValue::Font(font.clone())],
            Self::Underline { color, by_word } => {
                let mut style = UnderlineStyle::SINGLE;
                if *by_word {
                    style |= UnderlineStyle::BY_WORD;
                }
                vec![
                    AttributeValue::UnderlineStyle(style),
                    AttributeValue::UnderlineColor(color.clone()),
                ]
            }
            Self::NoUnderline => Vec::new(),
        }
    }

    /// The attribute kinds this directive clears before writing.
    #[must_use]
    pub const fn removes(&self) -> &'static [AttributeKind] {
        match self {
            Self::NoUnderline => &[AttributeKind::UnderlineStyle],
            _ => &[],
        }
    }
}

/// An independent attribute slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKind {
    ForegroundColor,
    Font,
    UnderlineStyle,
    UnderlineColor,
}

/// A value stored in one attribute slot.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue<C = Rgba, F = Font> {
    ForegroundColor(C),
    Font(F),
    UnderlineStyle(UnderlineStyle),
    UnderlineColor(C),
}

impl<C, F> AttributeValue<C, F> {
    /// The slot this value occupies.
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        match self {
            Self::ForegroundColor(_) => AttributeKind::ForegroundColor,
            Self::Font(_) => AttributeKind::Font,
            Self::UnderlineStyle(_) => AttributeKind::UnderlineStyle,
            Self::UnderlineColor(_) => AttributeKind::UnderlineColor,
        }
    }

    /// The foreground color, if this is one.
    #[must_use]
    pub const fn foreground_color(&self) -> Option<&C> {
        match self {
            Self::ForegroundColor(c) => Some(c),
            _ => None,
        }
    }

    /// The font, if this is one.
    #[must_use]
    pub const fn font(&self) -> Option<&F> {
        match self {
            Self::Font(f) => Some(f),
            _ => None,
        }
    }

    /// The underline style, if this is one.
    #[must_use]
    pub const fn underline_style(&self) -> Option<UnderlineStyle> {
        match self {
            Self::UnderlineStyle(s) => Some(*s),
            _ => None,
        }
    }

    /// The underline color, if this is one.
    #[must_use]
    pub const fn underline_color(&self) -> Option<&C> {
        match self {
            Self::UnderlineColor(c) => Some(c),
            _ => None,
        }
    }
}
