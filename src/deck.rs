//! The deck of undealt cards.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::error::DealError;

/// The undealt cards, treated as a stack: dealing pops from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled 52-card deck.
    ///
    /// Cards are laid out suit-major (Hearts, Diamonds, Clubs, Spades),
    /// rank-minor (1 through 13).
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.build();
        deck
    }

    /// Creates a deck holding exactly `cards`. The last card is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Replaces the contents with all 52 cards in build order.
    pub fn build(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in RANKS {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `count` cards from the end of the deck.
    ///
    /// The first returned card is the one that was last in the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `count` cards
    /// remain. The deck is left untouched in that case.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(DealError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        let mut dealt = self.cards.split_off(remaining - count);
        dealt.reverse();
        debug!("dealt {count} card(s), {} remaining", self.cards.len());
        Ok(dealt)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
