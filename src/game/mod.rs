//! Game engine and state management.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{DECK_SIZE, RANK_COUNT};
use crate::deck::Deck;
use crate::error::ConfigError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{FinalScores, PlayerScore};

pub mod state;
mod turn;

pub use state::GameState;

/// The smallest table a game can be played at.
pub const MIN_PLAYERS: usize = 2;

/// A Go Fish game engine that manages players, the deck, and turn order.
///
/// Players are seated at construction and never change. Turns rotate through
/// the seats, and each player always asks the next seat.
#[derive(Debug, Clone)]
pub struct Game {
    /// Seated players, in turn order.
    players: Vec<Player>,
    /// Undealt cards.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Seat index of the player whose turn it is.
    current: usize,
}

impl Game {
    /// Creates a game for the named players, shuffles with `seed`, and deals
    /// the initial hands.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewPlayers`] if fewer than
    /// [`GameOptions::min_players`] (and never fewer than [`MIN_PLAYERS`])
    /// names are given, or [`ConfigError::NotEnoughCards`] if the deck
    /// cannot cover the initial deal.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(["Ann", "Bob"], GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::Playing);
    /// assert_eq!(game.cards_remaining(), 42);
    /// ```
    pub fn new<I, S>(names: I, options: GameOptions, seed: u64) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names.into_iter().map(Player::new).collect();
        let minimum = options.min_players.max(MIN_PLAYERS);
        if players.len() < minimum {
            return Err(ConfigError::TooFewPlayers {
                players: players.len(),
                minimum,
            });
        }

        let needed = options.initial_deal_size(players.len());
        if needed > DECK_SIZE {
            return Err(ConfigError::NotEnoughCards {
                needed,
                available: DECK_SIZE,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut game = Self {
            players,
            deck,
            options,
            state: GameState::Setup,
            current: 0,
        };
        game.deal_initial_hands()?;
        game.state = GameState::Playing;

        info!(
            "game started with {} players, {} cards left in the deck",
            game.players.len(),
            game.deck.len()
        );
        Ok(game)
    }

    /// Creates a game with `count` players named "Player 1", "Player 2", and so on.
    ///
    /// # Errors
    ///
    /// See [`Game::new`].
    pub fn with_player_count(
        count: usize,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(
            (1..=count).map(|seat| format!("Player {seat}")),
            options,
            seed,
        )
    }

    /// Deals `hand_size` cards to every player in seat order.
    fn deal_initial_hands(&mut self) -> Result<(), ConfigError> {
        let hand_size = self.options.hand_size;
        let needed = self.options.initial_deal_size(self.players.len());
        for player in &mut self.players {
            let cards = self
                .deck
                .deal(hand_size)
                .map_err(|err| {
                    error!("initial deal failed: {err}");
                    ConfigError::NotEnoughCards {
                        needed,
                        available: DECK_SIZE,
                    }
                })?;
            debug!("dealt {} card(s) to {}", cards.len(), player.name());
            player.draw(cards);
        }
        Ok(())
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the seated players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in seat `index`.
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the player in seat `index` for direct manipulation.
    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Returns the seat index of the player whose turn it is.
    pub const fn current_player_index(&self) -> usize {
        self.current
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Returns the seat index of the player the current player will ask.
    pub fn target_index(&self) -> usize {
        (self.current + 1) % self.players.len()
    }

    /// Returns the undealt deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the undealt deck for direct manipulation.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of matches recorded across all players.
    pub fn total_matches(&self) -> usize {
        self.players.iter().map(Player::score).sum()
    }

    /// Returns whether every rank has been matched.
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::GameOver)
    }

    /// Returns each player's current score in seat order.
    pub fn scores(&self) -> FinalScores {
        FinalScores {
            players: self
                .players
                .iter()
                .map(|player| PlayerScore {
                    name: String::from(player.name()),
                    matches: player.score(),
                })
                .collect(),
        }
    }

    /// Recounts matches across all players and ends the game once every rank
    /// is matched. Returns the new total.
    fn update_matches(&mut self) -> usize {
        let total: usize = self
            .players
            .iter_mut()
            .map(Player::check_for_matches)
            .sum();

        if total >= RANK_COUNT && self.state == GameState::Playing {
            info!("all {RANK_COUNT} ranks matched, game over");
            self.state = GameState::GameOver;
        }
        total
    }
}
