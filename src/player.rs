//! Players and the ask/match protocol.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::hand::Hand;

/// A seated player: a name, a hand, and the ranks they have matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    /// Completed ranks, in the order they were matched.
    matches: Vec<u8>,
}

impl Player {
    /// Creates a player with an empty hand and no matches.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            matches: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the ranks this player has matched.
    #[must_use]
    pub fn matches(&self) -> &[u8] {
        &self.matches
    }

    /// Returns the number of completed matches.
    #[must_use]
    pub fn score(&self) -> usize {
        self.matches.len()
    }

    /// Adds cards to the hand.
    pub fn draw<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.hand.add_cards(cards);
    }

    /// Asks `other` for every card of `rank`.
    ///
    /// If `other` holds any, all of them move into this player's hand and
    /// `true` is returned. Otherwise nothing changes and `false` is returned.
    pub fn ask(&mut self, other: &mut Self, rank: u8) -> bool {
        if !other.hand.has_rank(rank) {
            return false;
        }

        let taken = other.hand.take_rank(rank);
        debug!(
            "{} took {} card(s) of rank {rank} from {}",
            self.name,
            taken.len(),
            other.name
        );
        self.hand.add_cards(taken);
        true
    }

    /// Moves every complete set of four out of the hand.
    ///
    /// Returns the cumulative number of matches this player has ever made,
    /// so repeated calls without new cards return the same value.
    pub fn check_for_matches(&mut self) -> usize {
        let completed = self.hand.remove_matches();
        for &rank in &completed {
            debug!("{} completed a match of rank {rank}", self.name);
        }
        self.matches.extend(completed);
        self.matches.len()
    }
}
