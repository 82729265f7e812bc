//! Game configuration options.

/// Configuration options for a Go Fish game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gofish::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_announce_total_matches(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player at setup.
    pub hand_size: usize,
    /// Minimum number of players at the table.
    pub min_players: usize,
    /// Whether the running match total is displayed after every turn.
    pub announce_total_matches: bool,
    /// Whether a player with an empty hand draws a card instead of passing.
    ///
    /// Off by default, in which case an empty-handed player simply passes.
    pub draw_on_empty_hand: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            min_players: 2,
            announce_total_matches: true,
            draw_on_empty_hand: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player at setup.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the minimum number of players.
    ///
    /// Values below 2 are raised to 2 when a game is created.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(3);
    /// assert_eq!(options.min_players, 3);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    /// Sets whether the running match total is displayed after every turn.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_announce_total_matches(false);
    /// assert_eq!(options.announce_total_matches, false);
    /// ```
    #[must_use]
    pub const fn with_announce_total_matches(mut self, announce: bool) -> Self {
        self.announce_total_matches = announce;
        self
    }

    /// Sets whether a player with an empty hand draws a card instead of passing.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_draw_on_empty_hand(true);
    /// assert!(options.draw_on_empty_hand);
    /// ```
    #[must_use]
    pub const fn with_draw_on_empty_hand(mut self, draw: bool) -> Self {
        self.draw_on_empty_hand = draw;
        self
    }

    /// Returns the number of cards the initial deal needs for `players` players.
    #[must_use]
    pub const fn initial_deal_size(&self, players: usize) -> usize {
        self.hand_size.saturating_mul(players)
    }
}
