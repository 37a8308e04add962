//! Font values for the font attribute.

/// Family name used by [`Font::system`].
pub const SYSTEM_FAMILY: &str = "system-ui";

/// A font family and point size.
///
/// Like [`Rgba`](crate::Rgba), this is a pass-through value: the styling code
/// stores and compares it but never interprets it.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Font {
    /// Create a font from a family name and point size.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// The platform UI font at the given size.
    #[must_use]
    pub fn system(size: f32) -> Self {
        Self::new(SYSTEM_FAMILY, size)
    }

    /// Return the same family at a different size.
    #[must_use]
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(17.0)
    }
}
