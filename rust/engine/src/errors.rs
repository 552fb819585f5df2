use thiserror::Error;

use crate::state::Street;

/// Failures reported to the caller that handed over a terminal state.
///
/// None of these are transient: each one means the state itself is unsound,
/// so the engine refuses to produce a winner instead of guessing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowdownError {
    #[error("Structural violation: {0}")]
    StructuralViolation(#[from] Violation),
    #[error("Showdown between {live} live players with only {community} community cards")]
    PrematureShowdown { live: usize, community: usize },
    #[error("Showdown produced no winners")]
    EmptyWinnerSet,
}

/// The specific structural defect behind [`ShowdownError::StructuralViolation`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("{street:?} requires {expected} community cards, found {actual}")]
    StreetMismatch {
        street: Street,
        expected: usize,
        actual: usize,
    },
    #[error("{0} community cards does not correspond to any street")]
    InvalidCommunityCount(usize),
    #[error("Hand evaluation needs 5 to 7 cards, got {0}")]
    PoolSize(usize),
    #[error("Player {player} must show down but has no hole cards")]
    MissingHoleCards { player: usize },
    #[error("Player index {player} appears more than once")]
    DuplicatePlayer { player: usize },
    #[error("Contributions given for some players but not player {player}")]
    PartialContributions { player: usize },
    #[error("Contributions total {total} but pot is {pot}")]
    ContributionMismatch { pot: u64, total: u64 },
}
