//! Animation definition of an animated sprite.
//!
//! [`SpriteAnimation`] describes *what* an animated sprite can play: the
//! animation it draws frames from, the named [`FrameRange`]s (clips) over those
//! frames, the playback speed, the selected clip and its [`PlayMode`]. The
//! runtime cursor lives in
//! [`SpriteAnimationState`](super::spriteanimationstate::SpriteAnimationState).

use std::collections::BTreeMap;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use super::playmode::PlayMode;

/// Name of the range synthesized when a sprite declares none.
pub const DEFAULT_FRAME_RANGE: &str = "Default";

/// A named, inclusive interval of frame indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub name: String,
    pub start_frame: usize,
    pub end_frame: usize,
}

impl FrameRange {
    pub fn new(name: impl Into<String>, start_frame: usize, end_frame: usize) -> Self {
        Self {
            name: name.into(),
            start_frame,
            end_frame,
        }
    }

    /// Number of frames in the range, `None` when `start_frame > end_frame`.
    pub fn frame_count(&self) -> Option<usize> {
        self.end_frame
            .checked_sub(self.start_frame)
            .map(|span| span + 1)
    }

    /// Whether the range addresses valid frames of a `frame_count` long sequence.
    pub fn fits(&self, frame_count: usize) -> bool {
        self.frame_count().is_some() && self.end_frame < frame_count
    }
}

/// Animation definition component.
///
/// After initialization `frame_range_map` is never empty and
/// `current_animation` is one of its keys.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct SpriteAnimation {
    /// Key of the frame sequence in the resource retriever.
    pub animation_name: String,
    pub frame_range_map: BTreeMap<String, FrameRange>,
    pub fps: u32,
    /// Name of the selected frame range.
    pub current_animation: String,
    pub play_mode: PlayMode,
}

impl SpriteAnimation {
    /// The selected frame range, if the name refers to one.
    pub fn current_range(&self) -> Option<&FrameRange> {
        self.frame_range_map.get(&self.current_animation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_range_count() {
        assert_eq!(FrameRange::new("a", 0, 0).frame_count(), Some(1));
        assert_eq!(FrameRange::new("a", 2, 5).frame_count(), Some(4));
        assert_eq!(FrameRange::new("a", 3, 2).frame_count(), None);
    }

    #[test]
    fn test_frame_range_fits() {
        assert!(FrameRange::new("a", 0, 4).fits(5));
        assert!(!FrameRange::new("a", 0, 5).fits(5));
        assert!(!FrameRange::new("a", 3, 2).fits(5));
        assert!(!FrameRange::new("a", 0, 0).fits(0));
    }

    #[test]
    fn test_current_range_lookup() {
        let mut anim = SpriteAnimation::default();
        anim.frame_range_map
            .insert("walk".to_string(), FrameRange::new("walk", 1, 3));
        anim.current_animation = "walk".to_string();
        assert_eq!(anim.current_range().unwrap().start_frame, 1);

        anim.current_animation = "jump".to_string();
        assert!(anim.current_range().is_none());
    }
}
