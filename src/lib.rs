//! A two-player card matching game engine with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type with positional insert and remove,
//! draw from the top, a Fisher-Yates shuffle and a stable sort, and a
//! [`Game`] type that deals two hands and plays turns: a player lays a card
//! sharing the suit or rank of the top played card, or draws one. When the
//! draw pile runs out, the played pile is shuffled back into it.
//!
//! # Example
//!
//! ```
//! use matchdeck::{Game, GameOptions, StopReason};
//!
//! let mut game = Game::new(GameOptions::default().with_turn_limit(10_000), 42);
//! game.start().unwrap();
//! let summary = game.run().unwrap();
//! assert_eq!(game.total_cards(), 52);
//! if let StopReason::Won(winner) = summary.reason {
//!     assert!(game.hand(winner).is_empty());
//! }
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
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, DeckError, TurnError};
pub use game::{Game, GameStatus, Player};
pub use options::GameOptions;
pub use result::{GameSummary, RecycleOutcome, StopReason, TurnOutcome};
