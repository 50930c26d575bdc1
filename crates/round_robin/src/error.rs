use thiserror::Error;

use crate::types::PlayerId;

/// Roster rejected before scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    #[error("a round-robin needs at least 2 players, got {count}")]
    TooFewPlayers { count: usize },

    #[error("player {0} appears more than once in the roster")]
    DuplicatePlayer(PlayerId),

    #[error("player id {0} is reserved for the bye")]
    ReservedIdentifier(PlayerId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised game result {0:?} (expected 1-0, 0-1 or 0.5-0.5)")]
pub struct ParseOutcomeError(pub String);
