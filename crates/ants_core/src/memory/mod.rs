//! # Pattern Memory Management
//!
//! Pattern memory is partitioned once, at compile time, into slot ranges.
//!
//! ## Design Philosophy
//!
//! Every range is reserved up front. During gameplay:
//! - No slot is allocated or freed
//! - A slot only changes *content*, tracked by its resident key
//! - Re-uploading content that is already resident is skipped

mod pattern_store;
mod slot;

pub use pattern_store::{CacheEntry, PatternStore, Residency, StoreStats};
pub use slot::SlotRange;
