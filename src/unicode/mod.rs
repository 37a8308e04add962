//! Unicode utilities for character counting and substring search.
//!
//! All offsets exposed by this crate are character offsets in a
//! [`CharUnit`], never byte offsets.

mod grapheme;
mod search;

pub use grapheme::{CharUnit, byte_range, char_count, unit_boundaries};
pub use search::find_first;
