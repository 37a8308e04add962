//! Apply one style directive over one resolved range.

use crate::error::Result;
use crate::style::{StyleAttribute, StyleValue};
use crate::text::{CharRange, StyledText};

/// Apply `attribute` over `range` and return the updated styled text.
///
/// `base` may be existing [`StyledText`] or plain text, which starts with no
/// attributes. Only the attribute kinds `attribute` touches are changed, and
/// only inside `range`.
///
/// Nothing here fails. An absent range (an anchor that did not resolve)
/// returns `base` unchanged, and so does a range reaching past the end of
/// the text.
///
/// # Examples
///
/// ```
/// use anchored_text::{Anchor, AttributeKind, Rgba, StyleAttribute, StyledText, apply_style, resolve};
///
/// let text = "Total: 42";
/// let styled: StyledText = apply_style(
///     text,
///     resolve(text, Anchor::After("Total: ")),
///     StyleAttribute::ForegroundColor(Rgba::RED),
/// );
/// assert!(styled.attribute_at(7, AttributeKind::ForegroundColor).is_some());
/// assert!(styled.attribute_at(0, AttributeKind::ForegroundColor).is_none());
///
/// let unchanged: StyledText = apply_style(text, None, StyleAttribute::NoUnderline);
/// assert!(!unchanged.has_attributes());
/// ```
pub fn apply_style<C, F>(
    base: impl Into<StyledText<C, F>>,
    range: Option<CharRange>,
    attribute: StyleAttribute<C, F>,
) -> StyledText<C, F>
where
    C: StyleValue,
    F: StyleValue,
{
    let base = base.into();
    let Some(range) = range else {
        tracing::debug!(attribute = attribute.name(), "no range resolved, style skipped");
        return base;
    };

    let mut styled = base.clone();
    match write_attribute(&mut styled, range, &attribute) {
        Ok(()) => {
            tracing::trace!(attribute = attribute.name(), %range, "style applied");
            styled
        }
        Err(err) => {
            tracing::warn!(attribute = attribute.name(), %err, "style range rejected");
            base
        }
    }
}

fn write_attribute<C: StyleValue, F: StyleValue>(
    styled: &mut StyledText<C, F>,
    range: CharRange,
    attribute: &StyleAttribute<C, F>,
) -> Result<()> {
    for &kind in attribute.removes() {
        styled.remove_attribute(range, kind)?;
    }
    for value in attribute.values() {
        styled.set_attribute(range, value)?;
    }
    Ok(())
}
