//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck;
use crate::options::GameOptions;

mod round;
pub mod state;

pub use state::GameState;

/// A War engine that deals games and resolves rounds.
///
/// The engine holds the rules and the random source used for dealing. Game
/// progress lives in the [`GameState`] values it hands out, so a new game is
/// simply a new value and the previous one can be dropped.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Random number generator used for dealing.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new engine with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let state = game.new_game();
    /// assert_eq!(state.player_cards(), 26);
    /// assert_eq!(state.computer_cards(), 26);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::from_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new engine dealing from an existing generator.
    #[must_use]
    pub const fn from_rng(options: GameOptions, rng: ChaCha8Rng) -> Self {
        Self { options, rng }
    }

    /// Deals a fresh deck and returns the starting state of a new game.
    ///
    /// Both hands hold half the deck, the stack is empty, and no cards have
    /// been revealed yet.
    pub fn new_game(&mut self) -> GameState {
        let (player, computer) = deck::deal(&mut self.rng);
        tracing::debug!(
            player = player.len(),
            computer = computer.len(),
            "dealt new game"
        );
        GameState::from_hands(player, computer)
    }
}
