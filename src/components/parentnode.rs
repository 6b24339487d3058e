//! Parent link of a scene node.
//!
//! The hierarchy itself is stored with bevy's
//! [`ChildOf`](bevy_ecs::hierarchy::ChildOf)/[`Children`](bevy_ecs::hierarchy::Children)
//! relationship. [`ParentNode`] mirrors the parent so item data can be read
//! without touching the relationship components.

use bevy_ecs::prelude::{Component, Entity};

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub parent: Option<Entity>,
}
