//! # Rules Error Types
//!
//! Everything that can fail outside the render path: configuration, the
//! settings blob, and moves that break the rules.

use ants_shared::{Card, Field};
use thiserror::Error;

/// Errors raised by the rules crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The configuration file could not be read or parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration value is outside its domain.
    #[error("configuration value `{field}` out of range: {reason}")]
    ConfigOutOfRange {
        /// Dotted path of the offending key.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Reading or writing the settings store failed.
    #[error("settings store: {0}")]
    SettingsIo(String),

    /// The settings blob failed validation.
    #[error("corrupt settings blob: {0}")]
    CorruptSettings(&'static str),

    /// A move named a hand slot with no card in it.
    #[error("hand slot {0} is empty")]
    EmptySlot(usize),

    /// A move named a slot outside the hand.
    #[error("hand slot {0} does not exist")]
    NoSuchSlot(usize),

    /// The player cannot pay for the card.
    #[error("cannot afford {card:?}: need {needed} {unit:?}, have {available}")]
    Unaffordable {
        /// The card.
        card: Card,
        /// Resource the card is paid in.
        unit: Field,
        /// Its cost.
        needed: u16,
        /// What the player holds.
        available: u16,
    },

    /// The game has already been decided.
    #[error("the game is over")]
    GameOver,
}

/// Result type for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
