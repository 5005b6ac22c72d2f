//! # Ants Rendering
//!
//! Tile and sprite renderer for a 256×192 display with 448 reusable 8×8
//! patterns, designed for:
//! - At most one upload per content change
//! - Every transfer presented inside the vertical blank
//! - No allocations in the render path
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       RENDER PIPELINE                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  AssetProvider → CardBufferCache ─┐                          │
//! │               → StructureRenderer ├─▶ Vdp (back Vram)        │
//! │               → PanelRenderer ────┘        │                 │
//! │                                   wait_for_vblank()          │
//! │                                            ▼                 │
//! │                                     front Vram → host        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pattern Memory
//!
//! | Range    | Owner                         |
//! |----------|-------------------------------|
//! | 0        | blank                         |
//! | 1-24     | sliding card sprite           |
//! | 25-48    | card back                     |
//! | 49-264   | hand and discard buffers      |
//! | 265-296  | panel digits                  |
//! | 297-356  | fortifications                |
//! | 357-364  | barriers                      |
//! | 365-447  | static art                    |

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod assets;
pub mod card_cache;
pub mod error;
pub mod panel;
pub mod playfield;
pub mod structure;
pub mod vdp;

pub use assets::{
    AssetBank, AssetParts, AssetProvider, MapAsset, PatternAsset, ProceduralArt, StructureArt,
    StructureAsset,
};
pub use card_cache::{compose_face, CardBufferCache, CardPatterns, BACK_SLOT, DISCARD_SLOT};
pub use error::{AssetError, AssetResult};
pub use panel::{PanelRenderer, PanelValues};
pub use playfield::{draw_background, load_static_assets};
pub use structure::{
    StructureDescriptor, StructureImage, StructureKind, StructureRenderer, MAX_STRUCTURE_HEIGHT,
};
pub use vdp::{SpriteEntry, Vdp, Vram, VramStats};
