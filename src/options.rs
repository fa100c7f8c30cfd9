//! Game configuration options.

/// Configuration options for a matching game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use matchdeck::GameOptions;
///
/// let options = GameOptions::default()
///     .with_packs(2)
///     .with_hand_size(7)
///     .with_turn_limit(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of 52-card packs shuffled into the hidden deck.
    pub packs: usize,
    /// Cards dealt to each player at the start.
    pub hand_size: usize,
    /// Maximum number of turns [`Game::run`](crate::Game::run) plays.
    /// 0 for no limit.
    pub turn_limit: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            packs: 1,
            hand_size: 8,
            turn_limit: 0,
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use matchdeck::GameOptions;
    ///
    /// let options = GameOptions::default().with_packs(3);
    /// assert_eq!(options.packs, 3);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: usize) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use matchdeck::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the turn limit for [`Game::run`](crate::Game::run).
    ///
    /// # Example
    ///
    /// ```
    /// use matchdeck::GameOptions;
    ///
    /// let options = GameOptions::default().with_turn_limit(1_000);
    /// assert_eq!(options.turn_limit, 1_000);
    /// ```
    #[must_use]
    pub const fn with_turn_limit(mut self, turn_limit: usize) -> Self {
        self.turn_limit = turn_limit;
        self
    }
}
