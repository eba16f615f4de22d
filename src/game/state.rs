//! Game state types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::Winner;

/// A snapshot of one game of War.
///
/// The state is a plain value: [`Game::new_game`](crate::Game::new_game)
/// hands out a fresh one and [`Game::play_round`](crate::Game::play_round)
/// advances it in place. Cards are only ever moved between the two hands and
/// the stack, so their total never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The player's cards.
    pub(crate) player: Hand,
    /// The computer's cards.
    pub(crate) computer: Hand,
    /// Cards at stake in the current round or war.
    pub(crate) stack: Vec<Card>,
    /// The pair revealed by the most recent round.
    pub(crate) last_revealed: Option<(Card, Card)>,
    /// Rounds played so far.
    pub(crate) rounds: u32,
    /// Wars started so far.
    pub(crate) wars: u32,
}

impl GameState {
    /// Creates a state from explicit hands with an empty stack.
    ///
    /// ```
    /// use warrs::{Card, GameState, Hand, Suit};
    ///
    /// let player = Hand::from_cards([Card::new(Suit::Hearts, 9)]);
    /// let computer = Hand::from_cards([Card::new(Suit::Clubs, 4)]);
    /// let state = GameState::from_hands(player, computer);
    /// assert_eq!(state.total_cards(), 2);
    /// assert!(!state.is_terminal());
    /// ```
    #[must_use]
    pub const fn from_hands(player: Hand, computer: Hand) -> Self {
        Self {
            player,
            computer,
            stack: Vec::new(),
            last_revealed: None,
            rounds: 0,
            wars: 0,
        }
    }

    /// Returns whether the game is over.
    ///
    /// Decided by hand emptiness alone; cards left on the stack do not count.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.player.is_empty() || self.computer.is_empty()
    }

    /// Returns the winner, or `None` while both sides still hold cards.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        match (self.player.is_empty(), self.computer.is_empty()) {
            (false, false) => None,
            (false, true) => Some(Winner::Player),
            (true, false) => Some(Winner::Computer),
            (true, true) => Some(Winner::Draw),
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the computer's hand.
    #[must_use]
    pub const fn computer_hand(&self) -> &Hand {
        &self.computer
    }

    /// Returns the cards on the stack, oldest first.
    #[must_use]
    pub fn stack(&self) -> &[Card] {
        &self.stack
    }

    /// Returns the number of cards the player holds.
    #[must_use]
    pub fn player_cards(&self) -> usize {
        self.player.len()
    }

    /// Returns the number of cards the computer holds.
    #[must_use]
    pub fn computer_cards(&self) -> usize {
        self.computer.len()
    }

    /// Returns the number of cards on the stack.
    #[must_use]
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Returns the number of cards in play across both hands and the stack.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.player.len() + self.computer.len() + self.stack.len()
    }

    /// Returns the player's and the computer's most recently revealed cards.
    ///
    /// `None` before the first round, when both cards are shown face down.
    #[must_use]
    pub const fn last_revealed(&self) -> Option<(Card, Card)> {
        self.last_revealed
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the number of wars started.
    #[must_use]
    pub const fn wars(&self) -> u32 {
        self.wars
    }
}
