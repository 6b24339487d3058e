//! Read-only view of loaded assets used by the entity factories.
//!
//! Factories never load anything themselves; they ask a retriever for the
//! already-resolved frame regions of an animation, for single image regions,
//! and for the resolution settings needed to size entities.

use crate::resources::atlasstore::AtlasRegion;
use crate::resources::projectconfig::{ProjectInfo, ResolutionEntry};

/// Synchronous, already-cached asset lookups.
pub trait ResourceRetriever: Send + Sync {
    /// Ordered frames of a sprite animation, `None` if the name is unknown.
    fn sprite_animation(&self, name: &str) -> Option<&[AtlasRegion]>;

    /// A single named image region, `None` if the name is unknown.
    fn texture_region(&self, name: &str) -> Option<&AtlasRegion>;

    /// The resolution whose assets are currently loaded.
    fn loaded_resolution(&self) -> &ResolutionEntry;

    /// Project-wide conversion values.
    fn project_info(&self) -> &ProjectInfo;

    /// Multiplier that scales loaded regions back to their authored size.
    fn resolution_multiplier(&self) -> f32 {
        self.loaded_resolution()
            .multiplier(&self.project_info().original_resolution)
    }
}
