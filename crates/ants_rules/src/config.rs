//! # Game Configuration
//!
//! Loaded once at startup from TOML. Every key is optional:
//!
//! ```toml
//! seed = 7
//! turn_limit = 2000
//!
//! [starting]
//! castle = 30
//! fence = 10
//!
//! [victory]
//! castle = 100
//!
//! [pacing]
//! turn_start_delay = 60
//! slide_speed = "slow"
//!
//! [players]
//! one = "human"
//! two = "ai"
//! ```

use std::path::Path;

use ants_shared::pacing::{
    DEAL_DELAY_FRAMES, DRAW_DELAY_FRAMES, MOVE_DELAY_FRAMES, TURN_START_DELAY_FRAMES,
};
use ants_shared::{Player, SlideSpeed, FIELD_COUNT};
use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};
use crate::resources::{Resources, MAX_RESOURCE};

/// Starting counters for both players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct StartingResources {
    pub builders: u16,
    pub bricks: u16,
    pub soldiers: u16,
    pub weapons: u16,
    pub magi: u16,
    pub crystals: u16,
    pub castle: u16,
    pub fence: u16,
}

impl Default for StartingResources {
    fn default() -> Self {
        Self {
            builders: 2,
            bricks: 5,
            soldiers: 2,
            weapons: 5,
            magi: 2,
            crystals: 5,
            castle: 30,
            fence: 10,
        }
    }
}

impl StartingResources {
    /// Values in panel order.
    #[must_use]
    pub fn values(&self) -> [u16; FIELD_COUNT] {
        [
            self.builders,
            self.bricks,
            self.soldiers,
            self.weapons,
            self.magi,
            self.crystals,
            self.castle,
            self.fence,
        ]
    }

    /// Counters a player starts with.
    #[must_use]
    pub fn resources(&self) -> Resources {
        Resources::new(self.values())
    }
}

/// When the game ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VictoryConfig {
    /// A player whose castle reaches this height wins.
    pub castle: u16,
}

impl Default for VictoryConfig {
    fn default() -> Self {
        Self { castle: 100 }
    }
}

/// Delays between turn phases, in frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacingConfig {
    /// After each hand is dealt.
    pub deal_delay: u32,
    /// After the turn starts and production is added.
    pub turn_start_delay: u32,
    /// After the move.
    pub move_delay: u32,
    /// After the replacement card is drawn.
    pub draw_delay: u32,
    /// Card slide duration.
    pub slide_speed: SlideSpeed,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            deal_delay: DEAL_DELAY_FRAMES,
            turn_start_delay: TURN_START_DELAY_FRAMES,
            move_delay: MOVE_DELAY_FRAMES,
            draw_delay: DRAW_DELAY_FRAMES,
            slide_speed: SlideSpeed::default(),
        }
    }
}

/// Who controls a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// Moves chosen by the computer.
    #[default]
    Ai,
    /// Moves chosen with a pad.
    Human,
}

/// Seat assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayersConfig {
    /// Left seat.
    pub one: Seat,
    /// Right seat.
    pub two: Seat,
}

impl PlayersConfig {
    /// Seat of a player.
    #[must_use]
    pub fn seat(&self, player: Player) -> Seat {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// Hands every human seat to the computer. Returns how many changed.
    pub fn computers_only(&mut self) -> usize {
        let mut replaced = 0;
        for seat in [&mut self.one, &mut self.two] {
            if *seat == Seat::Human {
                *seat = Seat::Ai;
                replaced += 1;
            }
        }
        replaced
    }
}

/// Everything tunable about a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Dealer seed. Equal seeds deal equal games.
    pub seed: u64,
    /// Turns after which an undecided game ends without a winner.
    pub turn_limit: u32,
    /// Starting counters.
    pub starting: StartingResources,
    /// Victory thresholds.
    pub victory: VictoryConfig,
    /// Turn pacing.
    pub pacing: PacingConfig,
    /// Seat assignment.
    pub players: PlayersConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0x414e_5453,
            turn_limit: 5000,
            starting: StartingResources::default(),
            victory: VictoryConfig::default(),
            pacing: PacingConfig::default(),
            players: PlayersConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> RulesResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| RulesError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> RulesResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            RulesError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), seed = config.seed, "configuration loaded");
        Ok(config)
    }

    /// Checks every value against its domain.
    pub fn validate(&self) -> RulesResult<()> {
        const NAMES: [&str; FIELD_COUNT] = [
            "starting.builders",
            "starting.bricks",
            "starting.soldiers",
            "starting.weapons",
            "starting.magi",
            "starting.crystals",
            "starting.castle",
            "starting.fence",
        ];
        for (field, value) in NAMES.into_iter().zip(self.starting.values()) {
            if value > MAX_RESOURCE {
                return Err(RulesError::ConfigOutOfRange {
                    field,
                    reason: format!("{value} exceeds {MAX_RESOURCE}"),
                });
            }
        }
        if self.victory.castle == 0 {
            return Err(RulesError::ConfigOutOfRange {
                field: "victory.castle",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.victory.castle > MAX_RESOURCE {
            return Err(RulesError::ConfigOutOfRange {
                field: "victory.castle",
                reason: format!("{} exceeds {MAX_RESOURCE}", self.victory.castle),
            });
        }
        if self.turn_limit == 0 {
            return Err(RulesError::ConfigOutOfRange {
                field: "turn_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
