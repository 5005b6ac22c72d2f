//! # Ants UI
//!
//! Everything between the pads and the renderers:
//! - Card positions on the table
//! - Card slides as sprites
//! - Controller sampling with edge detection and a reset latch
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      UI PIPELINE                       │
//! ├────────────────────────────────────────────────────────┤
//! │  PadSource → InputState → HandCursor → HandAction      │
//! │                                             ↓          │
//! │  CardPosition → SlideAnimator → sprites → Vdp          │
//! └────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod input;
pub mod layout;

pub use animation::{place_card_sprites, SlideAnimator};
pub use input::{Buttons, Controller, HandAction, HandCursor, InputState, PadSource, ScriptedPads};
pub use layout::{CardPosition, Point};
