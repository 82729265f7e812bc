use alloc::format;

use log::{debug, warn};

use crate::card::{Card, is_valid_rank};
use crate::error::TurnError;
use crate::interface::TurnInterface;
use crate::player::Player;
use crate::result::{FinalScores, TurnOutcome, TurnResult};

use super::{Game, GameState};

/// Borrows two distinct seats mutably.
fn seats_mut(players: &mut [Player], first: usize, second: usize) -> (&mut Player, &mut Player) {
    debug_assert_ne!(first, second);
    if first < second {
        let (left, right) = players.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = players.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}

impl Game {
    const fn ensure_playing(&self) -> Result<(), TurnError> {
        match self.state {
            GameState::Playing => Ok(()),
            GameState::Setup | GameState::GameOver => Err(TurnError::GameOver),
        }
    }

    /// Deals one card to the current player. Returns `None` if the deck is empty.
    fn go_fish(&mut self) -> Option<Card> {
        match self.deck.deal(1) {
            Ok(cards) => {
                let card = cards.first().copied();
                self.players[self.current].draw(cards);
                card
            }
            Err(err) => {
                debug!("go fish with an empty deck: {err}");
                None
            }
        }
    }

    /// Resolves the current player's ask without touching the turn pointer.
    fn resolve(&mut self, rank: u8) -> TurnOutcome {
        let player = self.current;
        let target = self.target_index();

        if self.players[player].hand().is_empty() {
            return self.empty_hand_outcome();
        }
        if self.players[target].hand().is_empty() {
            return TurnOutcome::TargetEmpty;
        }

        let (asker, asked) = seats_mut(&mut self.players, player, target);
        let before = asker.hand().len();
        if asker.ask(asked, rank) {
            TurnOutcome::Caught {
                count: asker.hand().len() - before,
            }
        } else {
            TurnOutcome::GoFish {
                drawn: self.go_fish(),
            }
        }
    }

    fn empty_hand_outcome(&mut self) -> TurnOutcome {
        let drawn = if self.options.draw_on_empty_hand {
            self.go_fish()
        } else {
            None
        };
        TurnOutcome::NoCards { drawn }
    }

    /// Records matches, checks for the end of the game, and passes the turn on.
    fn finish_turn(&mut self, rank: Option<u8>, outcome: TurnOutcome) -> TurnResult {
        let player = self.current;
        let target = self.target_index();
        let total_matches = self.update_matches();

        debug!(
            "{} asked {} for {rank:?}: {outcome:?} (total matches {total_matches})",
            self.players[player].name(),
            self.players[target].name()
        );

        self.current = target;

        TurnResult {
            player,
            target,
            rank,
            outcome,
            total_matches,
        }
    }

    /// Plays the current player's turn asking the next seat for `rank`.
    ///
    /// An empty hand on either side skips the ask. A failed ask draws one
    /// card from the deck if any remain. Afterwards matches are recorded,
    /// the game ends if every rank is matched, and the turn passes on.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameOver`] if the game is not in progress, or
    /// [`TurnError::InvalidRank`] if `rank` is outside 1 through 13. Nothing
    /// changes in either case.
    pub fn play_turn(&mut self, rank: u8) -> Result<TurnResult, TurnError> {
        self.ensure_playing()?;
        if !is_valid_rank(rank) {
            return Err(TurnError::InvalidRank(rank));
        }

        let outcome = self.resolve(rank);
        Ok(self.finish_turn(Some(rank), outcome))
    }

    /// Plays the current player's turn through `ui`.
    ///
    /// The player is shown their hand and prompted for a rank unless the
    /// hand is empty, in which case the turn is skipped without prompting.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_turn`].
    pub fn take_turn<T: TurnInterface + ?Sized>(
        &mut self,
        ui: &mut T,
    ) -> Result<TurnResult, TurnError> {
        self.ensure_playing()?;

        let player = &self.players[self.current];
        ui.display_message(&format!("{}, it's your turn.", player.name()));
        ui.display_hand(player);

        let result = if player.hand().is_empty() {
            let outcome = self.empty_hand_outcome();
            self.finish_turn(None, outcome)
        } else {
            let rank = ui.prompt_for_rank(player);
            self.play_turn(rank)?
        };

        report(ui, &result);
        if self.options.announce_total_matches {
            ui.display_message(&format!("Total matches: {}", result.total_matches));
        }
        Ok(result)
    }

    /// Plays turns through `ui` until every rank is matched, then shows and
    /// returns the final scores.
    ///
    /// Out-of-range ranks from `ui` are reported and the same player is
    /// prompted again.
    pub fn play<T: TurnInterface + ?Sized>(&mut self, ui: &mut T) -> FinalScores {
        while self.state == GameState::Playing {
            if let Err(err) = self.take_turn(ui) {
                warn!("turn rejected: {err}");
                ui.display_message(&format!("{err}. Please try again."));
            }
        }

        ui.display_message("Game Over!");
        let scores = self.scores();
        for score in &scores.players {
            ui.display_message(&format!("{} score: {}", score.name, score.matches));
        }
        scores
    }
}

fn report<T: TurnInterface + ?Sized>(ui: &mut T, result: &TurnResult) {
    match result.outcome {
        TurnOutcome::Caught { count } => {
            ui.display_message(&format!("Success! You got {count} card(s)."));
        }
        TurnOutcome::GoFish { drawn } => {
            ui.display_message("Go fish!");
            if drawn.is_none() {
                ui.display_message("Oops! The deck is empty.");
            }
        }
        TurnOutcome::NoCards { drawn } => {
            ui.display_message("Oops! You have no cards left.");
            if let Some(card) = drawn {
                ui.display_message(&format!("You drew the {card}."));
            }
        }
        TurnOutcome::TargetEmpty => {
            ui.display_message("Oops! The other player has no cards left.");
        }
    }
}
