//! Table error types.

use ants_rendering::AssetError;
use ants_rules::RulesError;
use thiserror::Error;

/// Errors surfaced by the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Rules, configuration or settings failure.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// The art bank was rejected.
    #[error(transparent)]
    Assets(#[from] AssetError),

    /// The computer had no card to move.
    #[error("{0:?} has no card to move")]
    EmptyHand(ants_shared::Player),

    /// A human seat is waiting on a pad source with nothing left to report.
    #[error("no controller input left for {0:?}")]
    PadsExhausted(ants_shared::Player),
}

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
