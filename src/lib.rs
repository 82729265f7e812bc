//! A Go Fish game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals the cards, resolves each
//! player's ask against the next seat, records completed matches, and ends
//! the game once all thirteen ranks are matched. Prompting and output are
//! left to a [`TurnInterface`] implementation.
//!
//! # Example
//!
//! ```
//! use gofish::{Game, GameOptions};
//!
//! let mut game = Game::with_player_count(2, GameOptions::default(), 42).unwrap();
//! let rank = game.players()[0].hand().cards()[0].rank;
//! let result = game.play_turn(rank).unwrap();
//! assert_eq!(result.player, 0);
//! assert_eq!(game.current_player_index(), 1);
//! assert_eq!(result.rank, Some(rank));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod interface;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, MATCH_SIZE, RANK_COUNT, RANKS, Suit};
pub use deck::Deck;
pub use error::{ConfigError, DealError, TurnError};
pub use game::{Game, GameState, MIN_PLAYERS};
pub use hand::Hand;
pub use interface::TurnInterface;
pub use options::GameOptions;
pub use player::Player;
pub use result::{FinalScores, PlayerScore, TurnOutcome, TurnResult};
