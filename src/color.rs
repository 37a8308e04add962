//! RGBA color values for foreground and underline attributes.
//!
//! The styling core treats colors as opaque host values; [`Rgba`] is the
//! default color type used by [`StyledText`](crate::StyledText) and
//! [`Label`](crate::Label) when the host does not bring its own.
//!
//! # Examples
//!
//! ```
//! use anchored_text::Rgba;
//!
//! let gold = Rgba::from_rgb_u8(255, 215, 0);
//! assert_eq!(gold.a, 1.0);
//! assert_eq!(Rgba::RED.with_alpha(0.5).a, 0.5);
//! ```

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Create a new RGBA color from f32 components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from f32 RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, u8::MAX)
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Return the color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_u8_constructors() {
        assert_eq!(Rgba::from_rgb_u8(255, 0, 0), Rgba::RED);
        assert_eq!(Rgba::from_rgba_u8(0, 0, 0, 0), Rgba::TRANSPARENT);

        let half = Rgba::from_rgba_u8(255, 255, 255, 128);
        assert_eq!(half.r, 1.0);
        assert!((half.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let faded = Rgba::BLUE.with_alpha(0.25);
        assert_eq!((faded.r, faded.g, faded.b), (0.0, 0.0, 1.0));
        assert_eq!(faded.a, 0.25);
        assert_ne!(faded, Rgba::BLUE);
    }
}
