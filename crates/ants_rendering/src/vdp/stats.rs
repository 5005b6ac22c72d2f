//! VRAM transfer statistics.

use ants_shared::constants::VBLANK_TRANSFER_BUDGET;

/// Counters accumulated across presented frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VramStats {
    /// Patterns written.
    pub pattern_uploads: u64,
    /// Tile map entries written.
    pub tilemap_writes: u64,
    /// Frames in which the sprite table was re-submitted.
    pub sprite_commits: u64,
    /// Bytes transferred by the most recent present.
    pub frame_bytes: usize,
    /// Largest single-frame transfer seen.
    pub worst_frame_bytes: usize,
    /// Frames presented.
    pub frames: u64,
    /// Frames, with the display on, whose transfer exceeded the budget.
    pub overruns: u64,
}

impl VramStats {
    /// Share of the vertical-blank budget used by the last frame.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn budget_usage(&self) -> f32 {
        self.frame_bytes as f32 / VBLANK_TRANSFER_BUDGET as f32
    }

    /// Returns true if no displayed frame has overrun the budget.
    #[must_use]
    pub fn within_budget(&self) -> bool {
        self.overruns == 0
    }
}

impl std::fmt::Display for VramStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frames={} patterns={} tiles={} sprite_commits={} worst_frame={}B overruns={}",
            self.frames,
            self.pattern_uploads,
            self.tilemap_writes,
            self.sprite_commits,
            self.worst_frame_bytes,
            self.overruns
        )
    }
}
