//! # Ants Core
//!
//! Fixed-budget building blocks shared by every renderer:
//! - Slot ranges and the pattern store that remembers which logical image
//!   occupies which physical pattern slots
//! - A double-buffered frame that presents only dirty regions
//! - The reset latch polled between frames
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations after construction** - stores are fixed arrays
//! 2. **One owner per slot range** - ranges never overlap inside a store
//! 3. **Present is the only path to the screen** - the back buffer is private
//!
//! ## Example
//!
//! ```rust,ignore
//! use ants_core::{PatternStore, SlotRange};
//!
//! let mut store: PatternStore<u8, 2> =
//!     PatternStore::new([SlotRange::new(10, 4), SlotRange::new(14, 4)]);
//! store.ensure_resident(0, 7, |range| upload(range));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod memory;
pub mod sync;

pub use memory::{CacheEntry, PatternStore, Residency, SlotRange, StoreStats};
pub use sync::{DirtySet, DirtySync, DoubleBuffer, FrontReader, ResetLatch};
