//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players are seated and the initial hands are being dealt.
    Setup,
    /// Turns are being played.
    Playing,
    /// Every rank has been matched.
    GameOver,
}
