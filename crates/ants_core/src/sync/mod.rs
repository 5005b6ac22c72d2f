//! # Frame Synchronization
//!
//! ## The Problem
//!
//! ```text
//! Game logic:  writes patterns, tilemap entries and sprites at any time
//! Display:     may only observe them between frames (vertical blank)
//!
//! Writing straight to the screen: TEARING, half-updated cards
//! ```
//!
//! ## The Solution: Dirty Present
//!
//! ```text
//! During the frame:
//!   Writers touch the back buffer and mark regions dirty
//!
//! Vertical blank:
//!   PRESENT copies dirty regions to the front buffer
//!   Display reads the front buffer only
//! ```
//!
//! Only changed regions are copied, so the per-frame transfer can be measured
//! against the vertical-blank budget.

mod dirty;
mod double_buffer;
mod reset;

pub use dirty::{DirtyIter, DirtySet};
pub use double_buffer::{DirtySync, DoubleBuffer, FrontReader};
pub use reset::ResetLatch;
