//! Rotation of a scene item around its origin.

use bevy_ecs::prelude::Component;

/// Clockwise rotation in degrees, as authored in the scene file.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    /// Rotation normalized into `[0, 360)`.
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            degrees: degrees.rem_euclid(360.0),
        }
    }
}
