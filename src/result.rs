//! Turn and game result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// How a single turn resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The target held the rank; `count` cards changed hands.
    Caught {
        /// Number of cards taken from the target.
        count: usize,
    },
    /// The target did not hold the rank. `drawn` is `None` if the deck was empty.
    GoFish {
        /// The card drawn from the deck, if any.
        drawn: Option<Card>,
    },
    /// The current player had no cards, so no ask was made.
    NoCards {
        /// The card drawn instead, if [`draw_on_empty_hand`] is enabled and
        /// the deck was not empty.
        ///
        /// [`draw_on_empty_hand`]: crate::GameOptions::draw_on_empty_hand
        drawn: Option<Card>,
    },
    /// The target had no cards, so no ask was made.
    TargetEmpty,
}

/// Summary of a resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// Seat index of the player who took the turn.
    pub player: usize,
    /// Seat index of the player who was asked.
    pub target: usize,
    /// The rank requested (`None` when an empty hand skipped the prompt).
    pub rank: Option<u8>,
    /// How the turn resolved.
    pub outcome: TurnOutcome,
    /// Matches across all players after the turn.
    pub total_matches: usize,
}

/// Final score of a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    /// The player's name.
    pub name: String,
    /// Number of matches completed.
    pub matches: usize,
}

/// Scores of every player, in seating order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScores {
    /// Per-player scores.
    pub players: Vec<PlayerScore>,
}

impl FinalScores {
    /// Returns the players with the highest score. Ties return several.
    #[must_use]
    pub fn winners(&self) -> Vec<&PlayerScore> {
        let best = self.players.iter().map(|p| p.matches).max().unwrap_or(0);
        self.players.iter().filter(|p| p.matches == best).collect()
    }

    /// Returns the sum of all players' matches.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.players.iter().map(|p| p.matches).sum()
    }
}
