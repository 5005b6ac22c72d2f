//! Reset request shared between the input source and the game loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-shot flag: raised by whoever sees the reset button, consumed by the
/// game loop between frames.
#[derive(Clone, Debug, Default)]
pub struct ResetLatch {
    raised: Arc<AtomicBool>,
}

impl ResetLatch {
    /// Creates a lowered latch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a reset.
    #[inline]
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Returns true once per raise, lowering the latch.
    #[inline]
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::AcqRel)
    }

    /// Checks the latch without consuming it.
    #[inline]
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}
