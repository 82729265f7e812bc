//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;
use core::mem;

use crate::card::{Card, MATCH_SIZE, RANKS};

/// Counts cards per rank. Index 0 is unused.
fn count_ranks(cards: &[Card]) -> [usize; 14] {
    let mut counts = [0; 14];
    for card in cards {
        if let Some(count) = counts.get_mut(card.rank as usize) {
            *count += 1;
        }
    }
    counts
}

/// The unordered cards a player holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds several cards to the hand.
    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards held of `rank`.
    #[must_use]
    pub fn count_rank(&self, rank: u8) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    /// Returns whether at least one card of `rank` is held.
    #[must_use]
    pub fn has_rank(&self, rank: u8) -> bool {
        self.cards.iter().any(|card| card.rank == rank)
    }

    /// Removes and returns every card of `rank`, keeping the order of the rest.
    pub fn take_rank(&mut self, rank: u8) -> Vec<Card> {
        let (taken, kept): (Vec<Card>, Vec<Card>) = mem::take(&mut self.cards)
            .into_iter()
            .partition(|card| card.rank == rank);
        self.cards = kept;
        taken
    }

    /// Removes every complete set of four and returns their ranks, lowest first.
    pub fn remove_matches(&mut self) -> Vec<u8> {
        let counts = count_ranks(&self.cards);
        let completed: Vec<u8> = RANKS
            .filter(|&rank| counts[rank as usize] == MATCH_SIZE)
            .collect();

        if !completed.is_empty() {
            self.cards.retain(|card| !completed.contains(&card.rank));
        }
        completed
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
