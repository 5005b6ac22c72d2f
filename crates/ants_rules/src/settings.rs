//! # Settings Blob
//!
//! Win counters survive power-off in a small flat record:
//!
//! ```text
//! [4 bytes: magic "ANTS"]
//! [2 bytes: version]
//! [2 bytes: wins, player one]
//! [2 bytes: wins, player two]
//! [4 bytes: CRC32 of the above]
//! ```
//!
//! All integers are little-endian. A missing or damaged blob reads as fresh
//! settings.

use std::path::{Path, PathBuf};

use ants_shared::Player;

use crate::error::{RulesError, RulesResult};

/// Magic bytes identifying a settings blob.
const SETTINGS_MAGIC: &[u8; 4] = b"ANTS";

/// Current blob format version.
const SETTINGS_VERSION: u16 = 1;

/// Size of the blob in bytes.
pub const SETTINGS_BYTES: usize = 14;

/// Bytes covered by the checksum.
const CHECKED_BYTES: usize = SETTINGS_BYTES - 4;

/// Persistent settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    wins: [u16; 2],
}

impl Settings {
    /// Games won by a player.
    #[inline]
    #[must_use]
    pub fn wins(&self, player: Player) -> u16 {
        self.wins[player.index()]
    }

    /// Counts a win.
    pub fn record_win(&mut self, player: Player) {
        let wins = &mut self.wins[player.index()];
        *wins = wins.saturating_add(1);
    }

    /// Encodes the blob.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SETTINGS_BYTES] {
        let mut out = [0u8; SETTINGS_BYTES];
        out[0..4].copy_from_slice(SETTINGS_MAGIC);
        out[4..6].copy_from_slice(&SETTINGS_VERSION.to_le_bytes());
        out[6..8].copy_from_slice(&self.wins[0].to_le_bytes());
        out[8..10].copy_from_slice(&self.wins[1].to_le_bytes());
        let crc = crc32fast::hash(&out[..CHECKED_BYTES]);
        out[CHECKED_BYTES..].copy_from_slice(&crc.to_le_bytes());
        out
    }

    /// Decodes and verifies a blob.
    pub fn from_bytes(data: &[u8]) -> RulesResult<Self> {
        let data: &[u8; SETTINGS_BYTES] = data
            .try_into()
            .map_err(|_| RulesError::CorruptSettings("wrong length"))?;
        if &data[0..4] != SETTINGS_MAGIC {
            return Err(RulesError::CorruptSettings("bad magic"));
        }
        let stored = u32::from_le_bytes([data[10], data[11], data[12], data[13]]);
        if crc32fast::hash(&data[..CHECKED_BYTES]) != stored {
            return Err(RulesError::CorruptSettings("checksum mismatch"));
        }
        if u16::from_le_bytes([data[4], data[5]]) != SETTINGS_VERSION {
            return Err(RulesError::CorruptSettings("unsupported version"));
        }
        Ok(Self {
            wins: [
                u16::from_le_bytes([data[6], data[7]]),
                u16::from_le_bytes([data[8], data[9]]),
            ],
        })
    }

    /// Loads from `store`, falling back to fresh settings when the blob is
    /// missing or damaged. Store I/O failures are still reported.
    pub fn load_or_default<S: SettingsStore + ?Sized>(store: &mut S) -> RulesResult<Self> {
        let Some(blob) = store.load()? else {
            return Ok(Self::default());
        };
        match Self::from_bytes(&blob) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                tracing::warn!(%err, "settings blob rejected, starting fresh");
                Ok(Self::default())
            }
        }
    }

    /// Writes to `store`.
    pub fn save<S: SettingsStore + ?Sized>(&self, store: &mut S) -> RulesResult<()> {
        store.save(&self.to_bytes())
    }
}

/// Where the settings blob lives.
pub trait SettingsStore {
    /// Reads the blob, or `None` if nothing was ever saved.
    fn load(&mut self) -> RulesResult<Option<Vec<u8>>>;

    /// Replaces the blob.
    fn save(&mut self, blob: &[u8]) -> RulesResult<()>;
}

/// A blob kept in memory, as battery-backed RAM would.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blob: Option<Vec<u8>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `blob`.
    #[must_use]
    pub fn with_blob(blob: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    /// Raw contents.
    #[must_use]
    pub fn blob(&self) -> Option<&[u8]> {
        self.blob.as_deref()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&mut self) -> RulesResult<Option<Vec<u8>>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &[u8]) -> RulesResult<()> {
        self.blob = Some(blob.to_vec());
        Ok(())
    }
}

/// A blob kept in a file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store backed by `path`. The file is created on first save.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn load(&mut self) -> RulesResult<Option<Vec<u8>>> {
        match std::fs::read(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RulesError::SettingsIo(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&mut self, blob: &[u8]) -> RulesResult<()> {
        std::fs::write(&self.path, blob).map_err(|e| {
            RulesError::SettingsIo(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}
