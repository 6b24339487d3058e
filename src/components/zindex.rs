//! Z-index component for render ordering.
//!
//! The [`ZIndex`] component carries the drawing order of an item inside its
//! layer. Entities with higher z-index values are drawn on top of those with
//! lower values.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
