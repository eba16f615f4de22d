//! Card types.

use core::cmp::Ordering;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Spades, Self::Hearts, Self::Diamonds];

    /// Returns the single-letter symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
        }
    }
}

/// Lowest rank in the deck.
pub const TWO: u8 = 2;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;
/// Rank of an Ace, the highest card.
pub const ACE: u8 = 14;

/// A playing card.
///
/// Equality compares both suit and rank. Play only ever compares ranks, see
/// [`Card::cmp_rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2..=10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 2..=14
    /// are accepted and still compare by their numeric value.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Compares two cards by rank alone.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use warrs::{Card, Suit};
    ///
    /// let seven_hearts = Card::new(Suit::Hearts, 7);
    /// let seven_clubs = Card::new(Suit::Clubs, 7);
    /// assert_eq!(seven_hearts.cmp_rank(&seven_clubs), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// Returns whether the card is a Jack, Queen, King, or Ace.
    #[must_use]
    pub const fn is_face(&self) -> bool {
        self.rank >= JACK
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            JACK => f.write_str("J")?,
            QUEEN => f.write_str("Q")?,
            KING => f.write_str("K")?,
            ACE => f.write_str("A")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
