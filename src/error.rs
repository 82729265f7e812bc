//! Error types for game operations.

use thiserror::Error;

/// Errors that prevent a game from being set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer players than the table minimum.
    #[error("at least {minimum} players are required, got {players}")]
    TooFewPlayers {
        /// Number of players requested.
        players: usize,
        /// Minimum number of players.
        minimum: usize,
    },
    /// The deck cannot cover the initial deal.
    #[error("initial deal needs {needed} cards but the deck holds {available}")]
    NotEnoughCards {
        /// Cards needed for the initial deal.
        needed: usize,
        /// Cards in the deck.
        available: usize,
    },
}

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer cards remain than were requested.
    #[error("cannot deal {requested} card(s), only {remaining} remaining")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// The requested rank is outside 1 through 13.
    #[error("invalid rank {0}, expected 1 through 13")]
    InvalidRank(u8),
}
