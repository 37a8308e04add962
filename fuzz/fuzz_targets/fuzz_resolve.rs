//! Fuzz target for anchor resolution and style application.
//!
//! Resolution must never panic, every resolved range must fit the text,
//! and applying a style over it must always succeed.

#![no_main]

use anchored_text::unicode::{CharUnit, byte_range, char_count};
use anchored_text::{
    Anchor, ResolveOptions, Rgba, StyleAttribute, StyledText, apply_style, resolve_with,
};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    first: &'a str,
    second: &'a str,
    mode: u8,
    scalar: bool,
}

fuzz_target!(|input: Input<'_>| {
    let unit = if input.scalar {
        CharUnit::Scalar
    } else {
        CharUnit::Grapheme
    };
    let options = ResolveOptions::default().with_unit(unit);
    let anchor = match input.mode % 7 {
        0 => Anchor::Exact(input.first),
        1 => Anchor::After(input.first),
        2 => Anchor::Before(input.first),
        3 => Anchor::From(input.first),
        4 => Anchor::To(input.first),
        5 => Anchor::Between {
            after: input.first,
            before: input.second,
        },
        _ => Anchor::FromTo {
            from: input.first,
            to: input.second,
        },
    };

    let range = resolve_with(input.text, anchor, &options);
    if let Some(range) = range {
        assert!(range.end() <= char_count(input.text, unit));
        assert!(byte_range(input.text, range, unit).is_some());

        let base: StyledText = StyledText::with_unit(input.text, unit);
        let styled = apply_style(base, Some(range), StyleAttribute::underline(Rgba::RED));
        assert_eq!(styled.has_attributes(), !range.is_empty());
    }
});
