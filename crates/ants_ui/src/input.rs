//! Controller input.
//!
//! Two pads, each with a 4-way direction and two buttons, sampled once per
//! frame. Edges (pressed/released) are derived from consecutive samples. The
//! host reset signal is a [`ResetLatch`] that may be raised from any thread
//! and is consumed between frames.

use std::collections::VecDeque;
use std::ops::BitOr;

use ants_core::ResetLatch;
use ants_shared::constants::HAND_SIZE;
use ants_shared::Player;

/// A set of pad buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Buttons(pub u8);

impl Buttons {
    /// Nothing held.
    pub const NONE: Self = Self(0);
    /// Direction up.
    pub const UP: Self = Self(0x01);
    /// Direction down.
    pub const DOWN: Self = Self(0x02);
    /// Direction left.
    pub const LEFT: Self = Self(0x04);
    /// Direction right.
    pub const RIGHT: Self = Self(0x08);
    /// First button: play.
    pub const BUTTON_1: Self = Self(0x10);
    /// Second button: discard.
    pub const BUTTON_2: Self = Self(0x20);

    /// Returns true if every button in `other` is in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// Returns true if no button is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Edge-detected state of one pad.
#[derive(Debug, Clone, Copy, Default)]
pub struct Controller {
    held: u8,
    pressed: u8,
    released: u8,
}

impl Controller {
    /// Takes this frame's raw sample.
    pub fn update(&mut self, raw: Buttons) {
        self.pressed = raw.0 & !self.held;
        self.released = self.held & !raw.0;
        self.held = raw.0;
    }

    /// Returns true if the buttons went down this frame.
    #[must_use]
    pub fn pressed(&self, buttons: Buttons) -> bool {
        Buttons(self.pressed).contains(buttons)
    }

    /// Returns true if the buttons are down.
    #[must_use]
    pub fn held(&self, buttons: Buttons) -> bool {
        Buttons(self.held).contains(buttons)
    }

    /// Returns true if the buttons came up this frame.
    #[must_use]
    pub fn released(&self, buttons: Buttons) -> bool {
        Buttons(self.released).contains(buttons)
    }
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    controllers: [Controller; 2],
    reset: ResetLatch,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame with both pads' raw samples.
    pub fn begin_frame(&mut self, raw: [Buttons; 2]) {
        for (controller, sample) in self.controllers.iter_mut().zip(raw) {
            controller.update(sample);
        }
    }

    /// The pad belonging to `player`.
    #[must_use]
    pub fn controller(&self, player: Player) -> &Controller {
        &self.controllers[player.index()]
    }

    /// A handle the host raises when its reset signal fires.
    #[must_use]
    pub fn reset_latch(&self) -> ResetLatch {
        self.reset.clone()
    }

    /// Consumes a pending reset request.
    pub fn take_reset(&self) -> bool {
        self.reset.take()
    }
}

/// Something that can be sampled for pad state once per frame.
pub trait PadSource {
    /// Raw samples for both pads, or `None` once the source has nothing
    /// left to report (a finished script, an unplugged pad).
    fn poll(&mut self) -> Option<[Buttons; 2]>;
}

/// Replays recorded samples, then reports itself exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPads {
    frames: VecDeque<[Buttons; 2]>,
}

impl ScriptedPads {
    /// Creates a source that replays `frames` in order.
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = [Buttons; 2]>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Appends a tap: `buttons` held for one frame, then released.
    pub fn tap(&mut self, player: Player, buttons: Buttons) {
        let mut down = [Buttons::NONE; 2];
        down[player.index()] = buttons;
        self.frames.push_back(down);
        self.frames.push_back([Buttons::NONE; 2]);
    }

    /// Samples not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl PadSource for ScriptedPads {
    fn poll(&mut self) -> Option<[Buttons; 2]> {
        self.frames.pop_front()
    }
}

/// What a human chose to do with a hand card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandAction {
    /// Play the card in this slot.
    Play(usize),
    /// Discard the card in this slot.
    Discard(usize),
}

/// Selection cursor over the hand. Left and right wrap around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandCursor {
    slot: usize,
}

impl HandCursor {
    /// Cursor on the leftmost slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected slot.
    #[inline]
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Moves the cursor, or returns the chosen action.
    pub fn apply(&mut self, pad: &Controller) -> Option<HandAction> {
        if pad.pressed(Buttons::BUTTON_1) {
            return Some(HandAction::Play(self.slot));
        }
        if pad.pressed(Buttons::BUTTON_2) {
            return Some(HandAction::Discard(self.slot));
        }
        if pad.pressed(Buttons::LEFT) {
            self.slot = (self.slot + HAND_SIZE - 1) % HAND_SIZE;
        } else if pad.pressed(Buttons::RIGHT) {
            self.slot = (self.slot + 1) % HAND_SIZE;
        }
        None
    }
}
