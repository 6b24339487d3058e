//! In-memory atlas registry.
//!
//! Stores packed image regions keyed by name. Regions that share a name and
//! carry an `index >= 0` form a sprite animation, ordered by index; regions
//! with a negative index are standalone images. A store can be filled in code
//! or from a JSON manifest:
//!
//! ```json
//! {
//!   "regions": [
//!     { "name": "hero_run", "index": 0, "page": "hero.png", "x": 0, "y": 0, "width": 64, "height": 64 },
//!     { "name": "hero_run", "index": 1, "page": "hero.png", "x": 64, "y": 0, "width": 64, "height": 64 },
//!     { "name": "crate", "page": "props.png", "x": 0, "y": 0, "width": 32, "height": 32 }
//!   ]
//! }
//! ```

use std::sync::Arc;

use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::resources::projectconfig::{ProjectConfig, ProjectInfo, ResolutionEntry};
use crate::resources::resourceretriever::ResourceRetriever;

/// Handle to a rectangle of an atlas page, in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtlasRegion {
    pub name: Arc<str>,
    /// Position inside an animation, `-1` for standalone images.
    pub index: i32,
    /// Atlas page (texture) the region lives on.
    pub page: Arc<str>,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl AtlasRegion {
    pub fn new(name: &str, index: i32, page: &str, width: u32, height: u32) -> Self {
        Self {
            name: Arc::from(name),
            index,
            page: Arc::from(page),
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub fn with_position(mut self, x: u32, y: u32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// One region entry of an atlas manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionEntry {
    pub name: String,
    #[serde(default = "standalone_index")]
    pub index: i32,
    pub page: String,
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

fn standalone_index() -> i32 {
    -1
}

/// Serialized list of atlas regions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtlasManifest {
    pub regions: Vec<RegionEntry>,
}

impl AtlasManifest {
    /// Loads a manifest from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Loaded atlas regions plus the project settings they were packed for.
#[derive(Debug, Clone, Default)]
pub struct AtlasStore {
    animations: FxHashMap<String, Vec<AtlasRegion>>,
    images: FxHashMap<String, AtlasRegion>,
    project: ProjectInfo,
    loaded_resolution: ResolutionEntry,
}

impl AtlasStore {
    /// Create an empty store for the given project configuration.
    pub fn new(config: &ProjectConfig) -> Self {
        Self {
            animations: FxHashMap::default(),
            images: FxHashMap::default(),
            project: config.project.clone(),
            loaded_resolution: config.loaded_resolution.clone(),
        }
    }

    /// Build a store from a manifest, grouping animation frames by name.
    pub fn from_manifest(config: &ProjectConfig, manifest: &AtlasManifest) -> Self {
        let mut store = Self::new(config);
        for entry in &manifest.regions {
            let region = AtlasRegion::new(
                &entry.name,
                entry.index,
                &entry.page,
                entry.width,
                entry.height,
            )
            .with_position(entry.x, entry.y);
            store.insert_region(region);
        }
        debug!(
            "Atlas store built: {} animations, {} images",
            store.animations.len(),
            store.images.len()
        );
        store
    }

    /// Insert a region. Indexed regions join the animation of the same name
    /// keeping index order; standalone regions replace any previous image.
    pub fn insert_region(&mut self, region: AtlasRegion) {
        if region.index < 0 {
            if self
                .images
                .insert(region.name.to_string(), region)
                .is_some()
            {
                warn!("Duplicate image region replaced");
            }
            return;
        }
        let frames = self.animations.entry(region.name.to_string()).or_default();
        let pos = frames.partition_point(|f| f.index <= region.index);
        frames.insert(pos, region);
    }

    /// Register a whole animation at once, frames in the given order.
    pub fn insert_animation(&mut self, name: impl Into<String>, frames: Vec<AtlasRegion>) {
        self.animations.insert(name.into(), frames);
    }
}

impl ResourceRetriever for AtlasStore {
    fn sprite_animation(&self, name: &str) -> Option<&[AtlasRegion]> {
        self.animations.get(name).map(Vec::as_slice)
    }

    fn texture_region(&self, name: &str) -> Option<&AtlasRegion> {
        self.images.get(name)
    }

    fn loaded_resolution(&self) -> &ResolutionEntry {
        &self.loaded_resolution
    }

    fn project_info(&self) -> &ProjectInfo {
        &self.project
    }
}
