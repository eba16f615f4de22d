//! Deck construction and dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{ACE, Card, DECK_SIZE, Suit, TWO};
use crate::hand::Hand;

/// Builds the canonical sorted deck, one card per suit and rank.
///
/// ```
/// use warrs::{DECK_SIZE, deck};
///
/// assert_eq!(deck::standard_deck().len(), DECK_SIZE);
/// ```
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in TWO..=ACE {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Deals a fresh deck into the player's and the computer's hands.
///
/// Cards are drawn one at a time from a random position of the remaining
/// deck, alternating player then computer, so each side receives half the
/// deck and every split is reachable.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use warrs::deck;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let (player, computer) = deck::deal(&mut rng);
/// assert_eq!(player.len(), 26);
/// assert_eq!(computer.len(), 26);
/// ```
pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> (Hand, Hand) {
    let mut deck = standard_deck();
    let mut player = Hand::new();
    let mut computer = Hand::new();

    while !deck.is_empty() {
        let index = rng.random_range(0..deck.len());
        player.add_card(deck.swap_remove(index));

        let index = rng.random_range(0..deck.len());
        computer.add_card(deck.swap_remove(index));
    }

    (player, computer)
}
