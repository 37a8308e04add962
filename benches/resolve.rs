//! Anchor resolution and style application benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use anchored_text::unicode::{CharUnit, find_first};
use anchored_text::{
    Anchor, AnchoredStyle, Font, Label, ResolveOptions, Rgba, StyleAttribute, StyledText,
    apply_style, resolve, resolve_with,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn resolve_ascii(c: &mut Criterion) {
    let short = "Hello World Foo";

    c.bench_function("resolve_exact_short", |b| {
        b.iter(|| resolve(black_box(short), Anchor::Exact(black_box("World"))));
    });

    let long = format!("{}needle{}", "x".repeat(1000), "y".repeat(1000));
    c.bench_function("resolve_between_2000", |b| {
        b.iter(|| {
            resolve(
                black_box(&long),
                Anchor::Between {
                    after: black_box("x"),
                    before: black_box("needle"),
                },
            )
        });
    });
}

fn resolve_unicode(c: &mut Criterion) {
    let mixed = "Grüße aus Köln 👨‍👩‍👧 und 東京 ".repeat(50);
    let scalars = ResolveOptions::default().with_unit(CharUnit::Scalar);

    c.bench_function("resolve_after_mixed_grapheme", |b| {
        b.iter(|| resolve(black_box(&mixed), Anchor::After(black_box("東京"))));
    });

    c.bench_function("resolve_after_mixed_scalar", |b| {
        b.iter(|| resolve_with(black_box(&mixed), Anchor::After(black_box("東京")), &scalars));
    });

    // Every byte match of "e" splits a cluster until the last one.
    let split = format!("{}e", "e\u{301}".repeat(200));
    c.bench_function("find_first_skips_split_clusters", |b| {
        b.iter(|| find_first(black_box(&split), black_box("e"), CharUnit::Grapheme));
    });
}

fn apply(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);

    c.bench_function("apply_style_layered", |b| {
        b.iter(|| {
            let mut styled: StyledText = StyledText::new(text.as_str());
            for (i, word) in ["quick", "fox", "over", "lazy"].iter().enumerate() {
                let attribute = if i % 2 == 0 {
                    StyleAttribute::ForegroundColor(Rgba::RED)
                } else {
                    StyleAttribute::Font(Font::system(18.0))
                };
                styled = apply_style(styled, resolve(&text, Anchor::From(word)), attribute);
            }
            black_box(styled)
        });
    });

    c.bench_function("label_underline_between", |b| {
        b.iter(|| {
            let mut label: Label = Label::new(text.as_str());
            label.set_underline(
                Rgba::BLUE,
                Anchor::Between {
                    after: "brown ",
                    before: " dog",
                },
            );
            black_box(label)
        });
    });
}

criterion_group!(benches, resolve_ascii, resolve_unicode, apply);
criterion_main!(benches);
