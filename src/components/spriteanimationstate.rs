//! Playback state of an animated sprite.
//!
//! [`SpriteAnimationState`] owns the full resolved frame sequence of the
//! sprite's animation and the segment currently being played, and turns an
//! accumulated state time into a frame index according to the segment's
//! [`PlayMode`].
//!
//! # Frame selection
//!
//! With `n` frames in the segment and `k = floor(time / frame_duration)`:
//!
//! - `Normal` – `min(k, n - 1)`, holds the last frame
//! - `Reversed` – `max(n - 1 - k, 0)`, holds the first frame
//! - `Loop` – `k mod n`
//! - `LoopReversed` – `n - 1 - (k mod n)`
//! - `LoopPingPong` – `k mod (2n - 2)`, mirrored past the last frame
//! - `LoopRandom` – a random frame every time `k` changes
//!
//! Single-frame segments always show their only frame.

use bevy_ecs::prelude::Component;
use fastrand::Rng;

use super::playmode::PlayMode;
use super::spriteanimation::{FrameRange, SpriteAnimation};
use crate::error::FactoryError;
use crate::resources::atlasstore::AtlasRegion;

/// Playback state component.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct SpriteAnimationState {
    all_regions: Vec<AtlasRegion>,
    frames: Vec<AtlasRegion>,
    /// Seconds each frame is shown.
    pub frame_duration: f32,
    pub play_mode: PlayMode,
    /// Accumulated playback time of the current segment, in seconds.
    pub time: f32,
    pub paused: bool,
    last_frame_number: usize,
    last_state_time: f32,
}

impl Default for SpriteAnimationState {
    fn default() -> Self {
        Self {
            all_regions: Vec::new(),
            frames: Vec::new(),
            frame_duration: 0.0,
            play_mode: PlayMode::default(),
            time: 0.0,
            paused: false,
            last_frame_number: 0,
            last_state_time: 0.0,
        }
    }
}

impl SpriteAnimationState {
    /// Replace the full frame sequence. The current segment is left untouched
    /// until [`set`](Self::set) or [`set_range`](Self::set_range) is called.
    pub fn set_all_regions(&mut self, regions: Vec<AtlasRegion>) {
        self.all_regions = regions;
    }

    /// Full resolved frame sequence of the animation.
    pub fn all_regions(&self) -> &[AtlasRegion] {
        &self.all_regions
    }

    /// Frames of the segment being played.
    pub fn frames(&self) -> &[AtlasRegion] {
        &self.frames
    }

    /// Derive the playing segment from the definition's current frame range.
    pub fn set(&mut self, animation: &SpriteAnimation) -> Result<(), FactoryError> {
        let range = animation
            .current_range()
            .ok_or_else(|| FactoryError::UnknownFrameRange(animation.current_animation.clone()))?;
        self.set_range(range, animation.fps, animation.play_mode)
    }

    /// Start playing `range` at `fps` frames per second from its first frame.
    pub fn set_range(
        &mut self,
        range: &FrameRange,
        fps: u32,
        play_mode: PlayMode,
    ) -> Result<(), FactoryError> {
        if !range.fits(self.all_regions.len()) {
            return Err(FactoryError::FrameRangeOutOfBounds {
                name: range.name.clone(),
                start: range.start_frame,
                end: range.end_frame,
                len: self.all_regions.len(),
            });
        }
        self.frames = self.all_regions[range.start_frame..=range.end_frame].to_vec();
        // fps of 0 yields an infinite frame duration: the first frame is held.
        self.frame_duration = 1.0 / fps as f32;
        self.play_mode = play_mode;
        self.time = 0.0;
        self.last_frame_number = 0;
        self.last_state_time = 0.0;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Index into [`frames`](Self::frames) shown at `state_time`.
    pub fn key_frame_index(&mut self, state_time: f32, rng: &mut Rng) -> usize {
        let len = self.frames.len();
        if len <= 1 {
            return 0;
        }
        let frame_number = (state_time / self.frame_duration) as usize;
        let index = match self.play_mode {
            PlayMode::Normal => frame_number.min(len - 1),
            PlayMode::Reversed => (len - 1).saturating_sub(frame_number),
            PlayMode::Loop => frame_number % len,
            PlayMode::LoopReversed => len - 1 - frame_number % len,
            PlayMode::LoopPingPong => {
                let step = frame_number % (len * 2 - 2);
                if step >= len {
                    len - 2 - (step - len)
                } else {
                    step
                }
            }
            PlayMode::LoopRandom => {
                let last_frame_number = (self.last_state_time / self.frame_duration) as usize;
                if last_frame_number != frame_number {
                    rng.usize(..len)
                } else {
                    self.last_frame_number
                }
            }
        };
        self.last_frame_number = index;
        self.last_state_time = state_time;
        index
    }

    /// Frame shown at the current state time.
    pub fn current_frame(&mut self, rng: &mut Rng) -> Option<&AtlasRegion> {
        let index = self.key_frame_index(self.time, rng);
        self.frames.get(index)
    }

    /// Whether a non-looping segment has reached its final frame.
    pub fn is_finished(&self) -> bool {
        if self.play_mode.is_looping() {
            return false;
        }
        let frame_number = (self.time / self.frame_duration) as usize;
        self.frames.len() <= frame_number + 1
    }

    /// Advance the state time by `delta` unless paused and return the frame to show.
    pub fn advance(&mut self, delta: f32, rng: &mut Rng) -> Option<&AtlasRegion> {
        if !self.paused {
            self.time += delta;
        }
        self.current_frame(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(n: usize) -> Vec<AtlasRegion> {
        (0..n)
            .map(|i| AtlasRegion::new("anim", i as i32, "page.png", 10, 10))
            .collect()
    }

    /// State playing all `n` frames at 1 fps so the frame number equals the time.
    fn state(n: usize, mode: PlayMode) -> SpriteAnimationState {
        let mut s = SpriteAnimationState::default();
        s.set_all_regions(regions(n));
        s.set_range(&FrameRange::new("all", 0, n - 1), 1, mode)
            .unwrap();
        s
    }

    fn sequence(s: &mut SpriteAnimationState, steps: usize) -> Vec<usize> {
        let mut rng = Rng::with_seed(1);
        (0..steps)
            .map(|t| s.key_frame_index(t as f32 + 0.5, &mut rng))
            .collect()
    }

    #[test]
    fn test_set_range_slices_segment() {
        let mut s = SpriteAnimationState::default();
        s.set_all_regions(regions(5));
        s.set_range(&FrameRange::new("mid", 1, 3), 10, PlayMode::Loop)
            .unwrap();
        let idx: Vec<i32> = s.frames().iter().map(|f| f.index).collect();
        assert_eq!(idx, vec![1, 2, 3]);
        assert!((s.frame_duration - 0.1).abs() < 1e-6);
        assert_eq!(s.all_regions().len(), 5);
    }

    #[test]
    fn test_set_range_out_of_bounds() {
        let mut s = SpriteAnimationState::default();
        s.set_all_regions(regions(3));
        let err = s
            .set_range(&FrameRange::new("bad", 1, 3), 10, PlayMode::Loop)
            .unwrap_err();
        assert_eq!(
            err,
            FactoryError::FrameRangeOutOfBounds {
                name: "bad".to_string(),
                start: 1,
                end: 3,
                len: 3,
            }
        );
        assert!(s.frames().is_empty());
    }

    #[test]
    fn test_set_unknown_current_range() {
        let mut s = SpriteAnimationState::default();
        s.set_all_regions(regions(3));
        let anim = SpriteAnimation {
            current_animation: "missing".to_string(),
            ..Default::default()
        };
        assert_eq!(
            s.set(&anim),
            Err(FactoryError::UnknownFrameRange("missing".to_string()))
        );
    }

    #[test]
    fn test_normal_holds_last_frame() {
        let mut s = state(3, PlayMode::Normal);
        assert_eq!(sequence(&mut s, 5), vec![0, 1, 2, 2, 2]);
    }

    #[test]
    fn test_reversed_holds_first_frame() {
        let mut s = state(3, PlayMode::Reversed);
        assert_eq!(sequence(&mut s, 5), vec![2, 1, 0, 0, 0]);
    }

    #[test]
    fn test_loop_wraps() {
        let mut s = state(3, PlayMode::Loop);
        assert_eq!(sequence(&mut s, 7), vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_loop_reversed_wraps() {
        let mut s = state(3, PlayMode::LoopReversed);
        assert_eq!(sequence(&mut s, 6), vec![2, 1, 0, 2, 1, 0]);
    }

    #[test]
    fn test_ping_pong_bounces() {
        let mut s = state(4, PlayMode::LoopPingPong);
        assert_eq!(sequence(&mut s, 9), vec![0, 1, 2, 3, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_random_stays_in_bounds_and_holds_within_frame() {
        let mut s = state(5, PlayMode::LoopRandom);
        let mut rng = Rng::with_seed(42);
        for t in 0..50 {
            let a = s.key_frame_index(t as f32 + 0.1, &mut rng);
            let b = s.key_frame_index(t as f32 + 0.2, &mut rng);
            assert!(a < 5);
            assert_eq!(a, b, "frame must not change within the same frame slot");
        }
    }

    #[test]
    fn test_single_frame_segment() {
        let mut s = state(1, PlayMode::LoopPingPong);
        assert_eq!(sequence(&mut s, 4), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_fps_holds_first_frame() {
        let mut s = SpriteAnimationState::default();
        s.set_all_regions(regions(4));
        s.set_range(&FrameRange::new("all", 0, 3), 0, PlayMode::Loop)
            .unwrap();
        let mut rng = Rng::with_seed(3);
        assert_eq!(s.advance(10.0, &mut rng).unwrap().index, 0);
    }

    #[test]
    fn test_advance_and_pause() {
        let mut s = state(3, PlayMode::Loop);
        let mut rng = Rng::with_seed(3);
        assert_eq!(s.advance(1.5, &mut rng).unwrap().index, 1);
        s.pause();
        assert_eq!(s.advance(1.0, &mut rng).unwrap().index, 1);
        s.resume();
        assert_eq!(s.advance(1.0, &mut rng).unwrap().index, 2);
    }

    #[test]
    fn test_is_finished() {
        let mut s = state(3, PlayMode::Normal);
        assert!(!s.is_finished());
        s.time = 2.5;
        assert!(s.is_finished());

        let mut looping = state(3, PlayMode::Loop);
        looping.time = 100.0;
        assert!(!looping.is_finished());
    }
}
