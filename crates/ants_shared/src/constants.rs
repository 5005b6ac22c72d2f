//! # Display & Pattern-Memory Constants
//!
//! The display is a fixed 32×24 grid of 8×8 tiles. Pattern memory holds
//! [`PATTERN_CAPACITY`] patterns and is partitioned statically:
//!
//! ```text
//!   [  0      ] blank pattern
//!   [  1 ..  24] card as sprite
//!   [ 25 ..  48] card back (pinned)
//!   [ 49 .. 264] nine-card buffer (8 hand + discard)
//!   [265 .. 296] panel digit boxes (2 players × 8 fields × 2)
//!   [297 .. 356] fortification buffers (2 players × 6 columns × 5)
//!   [357 .. 364] barrier buffers (2 players × 4)
//!   [365 .. 447] static patterns (background, panel art, indicator)
//! ```
//!
//! **CRITICAL:** each component writes only its own range. Nothing checks this
//! at runtime; the layout test below is the guard.

// =============================================================================
// DISPLAY
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u16 = 256;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u16 = 192;

/// Tile-map width in tiles.
pub const MAP_COLUMNS: usize = 32;

/// Tile-map height in tiles.
pub const MAP_ROWS: usize = 24;

/// Sprite attribute table entries.
pub const SPRITE_CAPACITY: usize = 64;

/// Frames per second of the target display.
pub const FRAME_RATE: u32 = 60;

// =============================================================================
// VBLANK TIMING
// =============================================================================

/// Scanlines in the blanking interval (NTSC: 262 - 192).
pub const VBLANK_SCANLINES: usize = 70;

/// First visible scanline occupied by a structure (tile row 6).
pub const STRUCTURE_DEADLINE_SCANLINE: usize = 48;

/// Bytes the bus moves into video memory per scanline.
pub const BYTES_PER_SCANLINE: usize = 16;

/// Bytes that can land in one frame before the scan reaches a structure.
pub const VBLANK_TRANSFER_BUDGET: usize =
    (VBLANK_SCANLINES + STRUCTURE_DEADLINE_SCANLINE) * BYTES_PER_SCANLINE;

// =============================================================================
// PATTERN MEMORY
// =============================================================================

/// Total pattern slots in video memory.
pub const PATTERN_CAPACITY: usize = 448;

/// Fragments per card (4 wide × 6 tall).
pub const CARD_FRAGMENTS: usize = 24;

/// Card width in tiles.
pub const CARD_COLUMNS: usize = 4;

/// Card height in tiles.
pub const CARD_ROWS: usize = 6;

/// Always-empty pattern.
pub const PATTERN_BLANK: u16 = 0;

/// Sprite-form card (slide animation).
pub const PATTERN_CARD_SPRITE: u16 = 1;

/// Pinned card back.
pub const PATTERN_CARD_BACK: u16 = PATTERN_CARD_SPRITE + CARD_FRAGMENTS as u16;

/// Rotating card buffer: 8 hand positions followed by the discard slot.
pub const PATTERN_CARD_BUFFER: u16 = PATTERN_CARD_BACK + CARD_FRAGMENTS as u16;

/// Slots in the rotating card buffer.
pub const CARD_BUFFER_SLOTS: usize = 9;

/// Panel digit boxes.
pub const PATTERN_PANEL_DIGITS: u16 = PATTERN_CARD_BUFFER + (CARD_BUFFER_SLOTS * CARD_FRAGMENTS) as u16;

/// Digit patterns per player (8 fields × 2 tiles).
pub const PANEL_DIGIT_PATTERNS_PER_PLAYER: u16 = 16;

/// Fortification columns per player.
pub const FORTIFICATION_COLUMNS: usize = 6;

/// Fragment budget of one fortification column.
pub const FORTIFICATION_FRAGMENTS: usize = 5;

/// Fortification buffers, player one then player two.
pub const PATTERN_FORTIFICATION_BUFFER: u16 = PATTERN_PANEL_DIGITS + 2 * PANEL_DIGIT_PATTERNS_PER_PLAYER;

/// Patterns reserved per fortification.
pub const FORTIFICATION_PATTERNS: u16 = (FORTIFICATION_COLUMNS * FORTIFICATION_FRAGMENTS) as u16;

/// Barrier columns per player.
pub const BARRIER_COLUMNS: usize = 1;

/// Fragment budget of one barrier column.
pub const BARRIER_FRAGMENTS: usize = 4;

/// Barrier buffers, player one then player two.
pub const PATTERN_BARRIER_BUFFER: u16 = PATTERN_FORTIFICATION_BUFFER + 2 * FORTIFICATION_PATTERNS;

/// Patterns reserved per barrier.
pub const BARRIER_PATTERNS: u16 = (BARRIER_COLUMNS * BARRIER_FRAGMENTS) as u16;

/// First static pattern (background art, panel art, indicator).
pub const STATIC_PATTERNS_START: u16 = PATTERN_BARRIER_BUFFER + 2 * BARRIER_PATTERNS;

/// Static pattern slots available.
pub const STATIC_PATTERNS_CAPACITY: usize = PATTERN_CAPACITY - STATIC_PATTERNS_START as usize;

// =============================================================================
// SCREEN GEOMETRY (tiles unless noted)
// =============================================================================

/// Top row of the hand.
pub const HAND_Y_TILE: usize = 18;

/// Top of the hand in pixels.
pub const HAND_Y_SPRITE: u16 = 144;

/// Hand positions.
pub const HAND_SIZE: usize = 8;

/// Draw pile column.
pub const DRAW_X_TILE: usize = 12;

/// Draw pile row.
pub const DRAW_Y_TILE: usize = 0;

/// Discard pile column.
pub const DISCARD_X_TILE: usize = 16;

/// Discard pile row.
pub const DISCARD_Y_TILE: usize = 0;

/// Background image origin column.
pub const BACKGROUND_X_TILE: usize = 4;

/// Background image origin row.
pub const BACKGROUND_Y_TILE: usize = 0;

/// Background image width.
pub const BACKGROUND_COLUMNS: usize = 24;

/// Background image height.
pub const BACKGROUND_ROWS: usize = 18;

/// First tile row of the structure region.
pub const STRUCTURE_TOP_ROW: usize = 6;

/// Height of the structure region.
pub const STRUCTURE_ROWS: usize = 12;

/// Left column of each player's fortification.
pub const FORTIFICATION_X_TILE: [usize; 2] = [6, 20];

/// Column of each player's barrier.
pub const BARRIER_X_TILE: [usize; 2] = [13, 18];

/// Left column of each side panel.
pub const PANEL_X_TILE: [usize; 2] = [0, 28];

/// Top row of the side panels.
pub const PANEL_Y_TILE: usize = 3;

/// Side panel width.
pub const PANEL_COLUMNS: usize = 4;

/// Side panel height.
pub const PANEL_ROWS: usize = 14;

/// Digit box column per player.
pub const DIGIT_BOX_X_TILE: [usize; 2] = [2, 30];

/// Digit box row per field.
pub const DIGIT_BOX_Y_TILE: [usize; 8] = [4, 5, 7, 8, 10, 11, 14, 15];

/// Offset of each field's digit box inside the panel art map.
pub const DIGIT_BOX_PANEL_INDEX: [usize; 8] = [6, 10, 18, 22, 30, 34, 46, 50];

/// Row of the active-player indicator.
pub const INDICATOR_Y_TILE: usize = 2;
