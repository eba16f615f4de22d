//! A card game War engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] engine that deals a shuffled deck into two
//! hands and resolves rounds, including wars and win detection. Game progress
//! is held in a [`GameState`] value owned by the caller, and every round
//! returns a [`RoundOutcome`] describing what to show.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut state = game.new_game();
//!
//! let outcome = game.play_round(&mut state).unwrap();
//! assert_eq!(state.total_cards(), 52);
//! let _ = outcome.resolution;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit, TWO};
pub use error::{PlayOutError, RoundError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{Resolution, RoundOutcome, Winner};
