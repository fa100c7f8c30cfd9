//! Error types for deck and game operations.

use thiserror::Error;

/// Errors that can occur when manipulating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The operation needs at least one card.
    #[error("deck is empty")]
    EmptyDeck,
    /// Position is not within the deck.
    #[error("position {position} is out of range for a deck of {len} cards")]
    OutOfRange {
        /// The requested position.
        position: usize,
        /// The number of cards in the deck.
        len: usize,
    },
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the hidden deck.
    #[error("not enough cards to deal: {0}")]
    Deck(#[from] DeckError),
}

/// Errors that can occur while playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// A player has already won.
    #[error("game is already over")]
    GameOver,
    /// A deck operation failed mid-turn.
    #[error("deck operation failed: {0}")]
    Deck(#[from] DeckError),
}
