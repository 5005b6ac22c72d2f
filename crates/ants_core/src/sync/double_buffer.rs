//! # Double-Buffered Frame
//!
//! Writers own the back buffer. Readers share the front buffer.
//!
//! ## Architecture
//!
//! ```text
//!          ┌────────────────────────────────┐
//!          │         DoubleBuffer<T>        │
//!          │                                │
//!          │  ┌─────────┐    ┌───────────┐  │
//!          │  │  back   │───▶│   front   │  │
//!          │  │ (owned) │    │ (RwLock)  │  │
//!          │  └─────────┘    └─────┬─────┘  │
//!          └───────────────────────┼────────┘
//!                 present()        │
//!                                  ▼
//!                          ┌──────────────┐
//!                          │ FrontReader  │
//!                          │  (display)   │
//!                          └──────────────┘
//! ```
//!
//! ## Cold Buffer Problem
//!
//! The front buffer is never rebuilt from scratch. `present` copies only
//! the regions the back buffer marked dirty, then clears the marks. Both
//! buffers start as clones of each other, so after every present they are
//! identical.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

/// State that can copy its dirty regions into a twin.
pub trait DirtySync {
    /// Copies every dirty region of `self` into `front`, clears the dirty
    /// marks and returns the number of bytes copied.
    fn sync_dirty_into(&mut self, front: &mut Self) -> usize;
}

/// Back buffer plus a shared front buffer.
///
/// ## Usage
///
/// ```rust,ignore
/// let mut frame = DoubleBuffer::new(Vram::new());
/// let display = frame.reader();
///
/// loop {
///     frame.back_mut().write_tilemap(x, y, entry);
///     let bytes = frame.present();
///     display.read().tilemap(x, y);
/// }
/// ```
#[derive(Debug)]
pub struct DoubleBuffer<T> {
    back: T,
    front: Arc<RwLock<T>>,
    frame_count: u64,
}

impl<T: DirtySync + Clone> DoubleBuffer<T> {
    /// Creates both buffers from the same initial state.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            front: Arc::new(RwLock::new(initial.clone())),
            back: initial,
            frame_count: 0,
        }
    }

    /// Read access to the back buffer.
    #[inline]
    #[must_use]
    pub fn back(&self) -> &T {
        &self.back
    }

    /// Write access to the back buffer.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        &mut self.back
    }

    /// Copies dirty regions to the front buffer.
    ///
    /// Returns the number of bytes transferred.
    pub fn present(&mut self) -> usize {
        let mut front = self.front.write();
        let bytes = self.back.sync_dirty_into(&mut front);
        self.frame_count += 1;
        bytes
    }

    /// Handle for observing the front buffer.
    #[must_use]
    pub fn reader(&self) -> FrontReader<T> {
        FrontReader {
            front: Arc::clone(&self.front),
        }
    }

    /// Presents performed so far.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Shared read-only view of the presented state.
#[derive(Debug)]
pub struct FrontReader<T> {
    front: Arc<RwLock<T>>,
}

impl<T> Clone for FrontReader<T> {
    fn clone(&self) -> Self {
        Self {
            front: Arc::clone(&self.front),
        }
    }
}

impl<T> FrontReader<T> {
    /// Locks the front buffer for reading.
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.front.read()
    }

    /// Runs `f` against the front buffer.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.front.read())
    }
}
