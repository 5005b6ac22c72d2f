//! # Ants Rules
//!
//! Pure game logic: no rendering, no timing.
//!
//! ## Design Principles
//!
//! 1. **Integers only** - counters are `u16`, clamped to what a panel can show
//! 2. **Deterministic** - a seed fixes every deal, so games replay exactly
//! 3. **External configuration** - balance and pacing live in TOML
//! 4. **Validated moves** - an illegal move is an error, never a silent no-op
//!
//! ## Example
//!
//! ```rust
//! use ants_rules::{ai, Dealer, GameConfig, GameState};
//! use ants_shared::Player;
//!
//! let config = GameConfig::default();
//! let mut dealer = Dealer::new(config.seed);
//! let mut game = GameState::new(&config);
//! for player in Player::ALL {
//!     for slot in 0..8 {
//!         game.deal(player, slot, dealer.deal());
//!     }
//! }
//! game.begin_turn(Player::One, false);
//! let action = ai::choose_move(&game, Player::One).expect("hand is full");
//! game.apply_move(action)?;
//! # Ok::<(), ants_rules::RulesError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod ai;
pub mod config;
pub mod dealer;
pub mod effects;
pub mod error;
pub mod game;
pub mod resources;
pub mod settings;

pub use config::{GameConfig, PacingConfig, PlayersConfig, Seat, StartingResources, VictoryConfig};
pub use dealer::Dealer;
pub use error::{RulesError, RulesResult};
pub use game::{GameResult, GameState, Hand, Move, MoveRecord};
pub use resources::{Resources, MAX_RESOURCE};
pub use settings::{FileStore, MemoryStore, Settings, SettingsStore, SETTINGS_BYTES};
