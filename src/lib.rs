//! `anchored_text` - Rich-text styling addressed by anchor strings
//!
//! Style parts of a label's text by naming the text around them instead of
//! counting offsets: "the text after `Total:`", "the text between `(` and
//! `)`". Anchors resolve to character ranges (grapheme clusters by default,
//! never bytes), and a style directive is then applied over that range.
//!
//! A miss is never an error: an anchor that does not resolve leaves the
//! text exactly as it was.
//!
//! # Examples
//!
//! ```
//! use anchored_text::{Anchor, AnchoredStyle, Font, Label, Rgba};
//!
//! let mut label: Label = Label::new("Terms apply. Read the terms here.");
//! label.set_font(Font::system(12.0), Anchor::From("Read"));
//! label.set_underline(Rgba::BLUE, Anchor::FromTo { from: "the terms", to: "here" });
//! label.set_text_color(Rgba::RED, Anchor::Exact("nowhere")); // no-op
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional channel casts
#![allow(clippy::cast_sign_loss)] // Intentional channel conversions
#![allow(clippy::module_name_repetitions)] // Allow StyledText in text etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod apply;
pub mod color;
pub mod error;
pub mod font;
pub mod label;
pub mod resolve;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use apply::apply_style;
pub use color::Rgba;
pub use error::{Error, Result};
pub use font::Font;
pub use label::{AnchoredStyle, Label, TextHost};
pub use resolve::{Anchor, ResolveOptions, resolve, resolve_with};
pub use style::{AttributeKind, AttributeValue, StyleAttribute, StyleValue, UnderlineStyle};
pub use text::{AttributeSpan, CharRange, Run, StyledText};
pub use unicode::CharUnit;
