//! Size of an entity in world units.

use bevy_ecs::prelude::Component;

/// Width and height in world units, computed once at creation from the
/// entity's atlas geometry.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
