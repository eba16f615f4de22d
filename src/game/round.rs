extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::{PlayOutError, RoundError};
use crate::hand::Hand;
use crate::result::{Resolution, RoundOutcome, Winner};

use super::{Game, GameState};

/// Moves every stack card, oldest first, to the bottom of `hand`.
fn collect_stack(hand: &mut Hand, stack: &mut Vec<Card>) -> usize {
    let count = stack.len();
    hand.add_cards(stack.drain(..));
    count
}

/// Moves up to `count` cards from the top of `hand` onto the stack.
fn ante(hand: &mut Hand, stack: &mut Vec<Card>, count: u8) {
    for _ in 0..count {
        let Some(card) = hand.draw() else {
            break;
        };
        stack.push(card);
    }
}

impl GameState {
    /// Takes the top card of each hand, or nothing if either hand is empty.
    fn reveal(&mut self) -> Option<(Card, Card)> {
        if self.is_terminal() {
            return None;
        }
        Some((self.player.draw()?, self.computer.draw()?))
    }
}

impl Game {
    /// Plays one round: both sides reveal their top card and the higher rank
    /// takes the stack.
    ///
    /// On a tie each side adds [`GameOptions::war_cards`] face-down cards to
    /// the stack (fewer if it runs short) and the stack stays on the table
    /// for the next round. If a side is left without cards the game ends and
    /// the other side collects whatever is still on the stack.
    ///
    /// [`GameOptions::war_cards`]: crate::GameOptions::war_cards
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if either hand is already empty.
    /// The state is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, Game, GameOptions, GameState, Hand, Resolution, Suit, Winner};
    ///
    /// let game = Game::new(GameOptions::default(), 0);
    /// let mut state = GameState::from_hands(
    ///     Hand::from_cards([Card::new(Suit::Hearts, 12)]),
    ///     Hand::from_cards([Card::new(Suit::Spades, 3)]),
    /// );
    ///
    /// let outcome = game.play_round(&mut state).unwrap();
    /// assert_eq!(outcome.resolution, Resolution::PlayerWinsRound);
    /// assert_eq!(outcome.winner, Some(Winner::Player));
    /// assert!(game.play_round(&mut state).is_err());
    /// ```
    pub fn play_round(&self, state: &mut GameState) -> Result<RoundOutcome, RoundError> {
        let (player_card, computer_card) = state.reveal().ok_or(RoundError::InvalidState)?;

        state.stack.push(player_card);
        state.stack.push(computer_card);
        state.last_revealed = Some((player_card, computer_card));
        state.rounds = state.rounds.saturating_add(1);

        tracing::trace!(
            round = state.rounds,
            player = %player_card,
            computer = %computer_card,
            "cards revealed"
        );

        let (resolution, mut cards_won) = match player_card.cmp_rank(&computer_card) {
            Ordering::Greater => (
                Resolution::PlayerWinsRound,
                collect_stack(&mut state.player, &mut state.stack),
            ),
            Ordering::Less => (
                Resolution::ComputerWinsRound,
                collect_stack(&mut state.computer, &mut state.stack),
            ),
            Ordering::Equal => {
                ante(&mut state.player, &mut state.stack, self.options.war_cards);
                ante(&mut state.computer, &mut state.stack, self.options.war_cards);
                state.wars = state.wars.saturating_add(1);
                tracing::debug!(
                    round = state.rounds,
                    rank = player_card.rank,
                    stack = state.stack.len(),
                    "war"
                );
                (Resolution::War, 0)
            }
        };

        // A side that ran dry mid-war forfeits the stack.
        let winner = state.winner();
        match winner {
            Some(Winner::Player) => {
                cards_won += collect_stack(&mut state.player, &mut state.stack);
            }
            Some(Winner::Computer) => {
                cards_won += collect_stack(&mut state.computer, &mut state.stack);
            }
            Some(Winner::Draw) | None => {}
        }

        if let Some(winner) = winner {
            tracing::debug!(?winner, rounds = state.rounds, wars = state.wars, "game over");
        }

        Ok(RoundOutcome {
            player_card,
            computer_card,
            resolution,
            cards_won,
            player_cards: state.player.len(),
            computer_cards: state.computer.len(),
            stack_cards: state.stack.len(),
            winner,
        })
    }

    /// Plays rounds until one side runs out of cards.
    ///
    /// Returns the winner of the game.
    ///
    /// # Errors
    ///
    /// Returns [`PlayOutError::InvalidState`] if the game is already over, or
    /// [`PlayOutError::RoundLimit`] once the state's round count reaches
    /// [`GameOptions::max_rounds`](crate::GameOptions::max_rounds).
    pub fn play_out(&self, state: &mut GameState) -> Result<Winner, PlayOutError> {
        if state.is_terminal() {
            return Err(PlayOutError::InvalidState);
        }

        loop {
            if let Some(limit) = self
                .options
                .max_rounds
                .filter(|&limit| state.rounds >= limit)
            {
                tracing::debug!(limit, "round limit reached");
                return Err(PlayOutError::RoundLimit(limit));
            }

            if let Some(winner) = self.play_round(state)?.winner {
                return Ok(winner);
            }
        }
    }
}
