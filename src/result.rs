//! Round outcome types.

use crate::card::Card;

/// How a single comparison was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The player's card ranked higher; the player takes the stack.
    PlayerWinsRound,
    /// The computer's card ranked higher; the computer takes the stack.
    ComputerWinsRound,
    /// The ranks tied; the stack grows and stays on the table.
    War,
}

/// The winner of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The computer ran out of cards.
    Player,
    /// The player ran out of cards.
    Computer,
    /// Both sides ran out at the same time.
    Draw,
}

/// Everything a caller needs to render one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The card the player revealed.
    pub player_card: Card,
    /// The card the computer revealed.
    pub computer_card: Card,
    /// How the comparison was resolved.
    pub resolution: Resolution,
    /// Cards moved from the stack into a hand this round.
    pub cards_won: usize,
    /// Cards left in the player's hand.
    pub player_cards: usize,
    /// Cards left in the computer's hand.
    pub computer_cards: usize,
    /// Cards left on the stack.
    pub stack_cards: usize,
    /// The winner, if this round ended the game.
    pub winner: Option<Winner>,
}

impl RoundOutcome {
    /// Returns whether this round ended the game.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }
}
