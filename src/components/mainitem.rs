//! Identity of a scene item.

use bevy_ecs::prelude::Component;

use crate::factory::EntityKind;

/// Identity and bookkeeping data every scene item carries.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct MainItem {
    /// Unique id within the scene.
    pub unique_id: i32,
    /// Identifier used by game code to look the item up.
    pub item_identifier: String,
    /// Human readable name shown by tools.
    pub item_name: String,
    pub tags: Vec<String>,
    pub kind: EntityKind,
}

impl MainItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
