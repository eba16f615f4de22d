//! A side's pile of cards.

extern crate alloc;

use alloc::collections::VecDeque;

use crate::card::Card;

/// The cards held by one side.
///
/// A hand is a queue: cards are revealed from the front and winnings are
/// placed at the back in the order they were on the stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, front first.
    cards: VecDeque<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a hand holding the given cards, the first card on top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Places a card at the bottom of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Places cards at the bottom of the hand, keeping their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Returns an iterator over the cards, top first.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}
