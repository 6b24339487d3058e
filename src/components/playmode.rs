//! Play mode of a sprite animation segment.
//!
//! Scene files store the play mode as a legacy integer code. The table below
//! is fixed; code `6` is a second spelling of [`PlayMode::Normal`] and is kept
//! as such.
//!
//! | code | mode           |
//! |------|----------------|
//! | 0    | Normal         |
//! | 1    | Reversed       |
//! | 2    | Loop           |
//! | 3    | LoopReversed   |
//! | 4    | LoopPingPong   |
//! | 5    | LoopRandom     |
//! | 6    | Normal         |

use serde::{Deserialize, Serialize};

/// How the frames of a segment are traversed over time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayMode {
    /// Play forward once and hold the last frame.
    #[default]
    Normal,
    /// Play backward once and hold the first frame.
    Reversed,
    /// Play forward and restart from the first frame.
    Loop,
    /// Play backward and restart from the last frame.
    LoopReversed,
    /// Bounce between the first and last frame.
    LoopPingPong,
    /// Show a random frame each time the frame number changes.
    LoopRandom,
}

impl PlayMode {
    /// Translate a legacy play-mode code. Codes outside the table map to `None`.
    pub fn from_legacy_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(PlayMode::Normal),
            1 => Some(PlayMode::Reversed),
            2 => Some(PlayMode::Loop),
            3 => Some(PlayMode::LoopReversed),
            4 => Some(PlayMode::LoopPingPong),
            5 => Some(PlayMode::LoopRandom),
            6 => Some(PlayMode::Normal),
            _ => None,
        }
    }

    /// Whether playback wraps around instead of stopping at an end.
    pub fn is_looping(self) -> bool {
        !matches!(self, PlayMode::Normal | PlayMode::Reversed)
    }
}
