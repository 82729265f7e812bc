//! The turn interface the engine drives during play.

use crate::player::Player;

/// Input and output for a game in progress.
///
/// Implementations own all prompting and formatting. The engine only ever
/// receives a rank from [`prompt_for_rank`](Self::prompt_for_rank), so
/// re-prompting on malformed input belongs here.
pub trait TurnInterface {
    /// Asks `player` which rank to request. Must return a value in 1 through 13.
    fn prompt_for_rank(&mut self, player: &Player) -> u8;

    /// Shows `player`'s hand.
    fn display_hand(&mut self, player: &Player);

    /// Shows a status message.
    fn display_message(&mut self, text: &str);
}
