//! Per-axis scale of a scene item.
//!
//! Scale is applied on top of [`Dimensions`](super::dimensions::Dimensions);
//! the factories never fold it into the measured size.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Scale {
    /// Unscaled.
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
