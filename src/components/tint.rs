//! Color tint component.
//!
//! The [`Tint`] component stores the color modulation applied to an item when
//! it is drawn. It is set from the item descriptor at creation time.

use bevy_ecs::prelude::Component;

/// Color tint component for rendering modulation.
#[derive(Component, Clone, Debug, Copy, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a tint from normalized `[r, g, b, a]` floats, clamped to `0..=1`.
    pub fn from_normalized(rgba: [f32; 4]) -> Self {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_u8(rgba[0]), to_u8(rgba[1]), to_u8(rgba[2]), to_u8(rgba[3]))
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let t = Tint::new(100, 150, 200, 255);
        assert_eq!((t.r, t.g, t.b, t.a), (100, 150, 200, 255));
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Tint::default(), Tint::new(255, 255, 255, 255));
    }

    #[test]
    fn test_from_normalized() {
        let t = Tint::from_normalized([1.0, 0.5, 0.0, 1.0]);
        assert_eq!((t.r, t.g, t.b, t.a), (255, 128, 0, 255));
    }

    #[test]
    fn test_from_normalized_clamps() {
        let t = Tint::from_normalized([2.0, -1.0, 0.0, 1.5]);
        assert_eq!((t.r, t.g, t.b, t.a), (255, 0, 0, 255));
    }
}
