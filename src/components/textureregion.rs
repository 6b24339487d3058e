//! The image an entity currently displays.

use bevy_ecs::prelude::Component;

use crate::resources::atlasstore::AtlasRegion;

/// Display region of an entity. Animated sprites start on their first frame
/// and the playback system swaps the region as frames change.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct TextureRegion {
    pub region: Option<AtlasRegion>,
}
