//! Turn pacing, in frames.

use serde::{Deserialize, Serialize};

/// Pause after a hand is dealt.
pub const DEAL_DELAY_FRAMES: u32 = 60;

/// Pause at the start of a turn, after production.
pub const TURN_START_DELAY_FRAMES: u32 = 60;

/// Pause after a card is played or discarded.
pub const MOVE_DELAY_FRAMES: u32 = 30;

/// Pause after the replacement card is drawn.
pub const DRAW_DELAY_FRAMES: u32 = 30;

/// How quickly a card slides between positions.
///
/// A slide always takes a power-of-two number of frames so positions can be
/// stepped in fixed point without division.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideSpeed {
    /// 16 frames.
    #[default]
    Fast,
    /// 32 frames.
    Slow,
}

impl SlideSpeed {
    /// Fixed-point shift; the slide lasts `1 << shift` frames.
    #[inline]
    #[must_use]
    pub const fn shift(self) -> u32 {
        match self {
            Self::Fast => 4,
            Self::Slow => 5,
        }
    }

    /// Frames the slide lasts.
    #[inline]
    #[must_use]
    pub const fn frames(self) -> u32 {
        1 << self.shift()
    }
}
