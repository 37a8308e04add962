//! Character ranges and styled text.
//!
//! Key types:
//!
//! - [`CharRange`]: a half-open span measured in characters
//! - [`AttributeSpan`]: one attribute value over one range
//! - [`StyledText`]: plain text plus non-overlapping per-kind spans
//! - [`Run`]: a stretch of text with a constant attribute set
//!
//! # Examples
//!
//! ```
//! use anchored_text::{AttributeValue, CharRange, Font, Rgba, StyledText};
//!
//! let mut text: StyledText = StyledText::new("Hello World");
//! text.set_attribute(CharRange::new(0, 5), AttributeValue::ForegroundColor(Rgba::RED))
//!     .unwrap();
//! text.set_attribute(CharRange::new(3, 5), AttributeValue::Font(Font::system(20.0)))
//!     .unwrap();
//!
//! let runs = text.runs();
//! let pieces: Vec<&str> = runs.iter().map(|run| run.text).collect();
//! assert_eq!(pieces, ["Hel", "lo", " Wo", "rld"]);
//! ```

mod range;
mod segment;
mod styled;

pub use range::CharRange;
pub use segment::AttributeSpan;
pub use styled::{Run, StyledText};
