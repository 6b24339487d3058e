//! Item descriptors consumed by the factories.
//!
//! A descriptor is the plain value a scene loader hands to
//! [`EntityFactory::create_entity`](super::EntityFactory::create_entity). The
//! serde derives only allow descriptors to be read from JSON scene files; the
//! layout mirrors the field names below.

use serde::{Deserialize, Serialize};

use super::EntityKind;
use crate::components::spriteanimation::FrameRange;

/// Data shared by every scene item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainItemDescriptor {
    pub unique_id: i32,
    pub item_identifier: String,
    pub item_name: String,
    pub tags: Vec<String>,
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation: f32,
    pub z_index: i32,
    /// Normalized RGBA.
    pub tint: [f32; 4],
}

impl Default for MainItemDescriptor {
    fn default() -> Self {
        Self {
            unique_id: -1,
            item_identifier: String::new(),
            item_name: String::new(),
            tags: Vec::new(),
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            z_index: 0,
            tint: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Descriptor of an animated sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteAnimationDescriptor {
    #[serde(default)]
    pub item: MainItemDescriptor,
    pub animation_name: String,
    /// Named clips; may be empty, duplicates are resolved last-wins.
    #[serde(default)]
    pub frame_ranges: Vec<FrameRange>,
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Selected clip; when unset a deterministic default is chosen.
    #[serde(default)]
    pub current_animation: Option<String>,
    /// Legacy play-mode code, see [`PlayMode`](crate::components::playmode::PlayMode).
    #[serde(default = "default_play_mode")]
    pub play_mode: i32,
}

fn default_fps() -> u32 {
    24
}

fn default_play_mode() -> i32 {
    2
}

impl SpriteAnimationDescriptor {
    pub fn new(animation_name: impl Into<String>) -> Self {
        Self {
            item: MainItemDescriptor::default(),
            animation_name: animation_name.into(),
            frame_ranges: Vec::new(),
            fps: default_fps(),
            current_animation: None,
            play_mode: default_play_mode(),
        }
    }

    pub fn with_frame_range(mut self, range: FrameRange) -> Self {
        self.frame_ranges.push(range);
        self
    }

    pub fn with_current(mut self, name: impl Into<String>) -> Self {
        self.current_animation = Some(name.into());
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_play_mode(mut self, code: i32) -> Self {
        self.play_mode = code;
        self
    }

    pub fn with_item(mut self, item: MainItemDescriptor) -> Self {
        self.item = item;
        self
    }
}

/// Descriptor of a static image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleImageDescriptor {
    #[serde(default)]
    pub item: MainItemDescriptor,
    pub image_name: String,
}

/// Any item a scene can contain, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ItemDescriptor {
    Image(SimpleImageDescriptor),
    SpriteAnimation(SpriteAnimationDescriptor),
}

impl ItemDescriptor {
    pub fn kind(&self) -> EntityKind {
        match self {
            ItemDescriptor::Image(_) => EntityKind::Image,
            ItemDescriptor::SpriteAnimation(_) => EntityKind::SpriteAnimation,
        }
    }

    pub fn item(&self) -> &MainItemDescriptor {
        match self {
            ItemDescriptor::Image(d) => &d.item,
            ItemDescriptor::SpriteAnimation(d) => &d.item,
        }
    }
}

/// A scene file: a flat list of items created under one root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescriptor {
    #[serde(default)]
    pub items: Vec<ItemDescriptor>,
}
