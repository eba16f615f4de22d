//! Game configuration options.

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_war_cards(3)
///     .with_max_rounds(Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards each side puts face down when a war starts.
    pub war_cards: u8,
    /// Maximum number of rounds [`Game::play_out`](crate::Game::play_out)
    /// will play before giving up. `None` to play until a side runs out.
    pub max_rounds: Option<u32>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            war_cards: 1,
            max_rounds: None,
        }
    }
}

impl GameOptions {
    /// Sets the number of face-down cards per side in a war.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_cards(3);
    /// assert_eq!(options.war_cards, 3);
    /// ```
    #[must_use]
    pub const fn with_war_cards(mut self, war_cards: u8) -> Self {
        self.war_cards = war_cards;
        self
    }

    /// Sets the round limit used when playing a game out.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(Some(500));
    /// assert_eq!(options.max_rounds, Some(500));
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
