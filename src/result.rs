//! Outcome types reported by the turn engine.

use crate::card::Card;
use crate::game::Player;

/// What happened during a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player laid a matching card on the played deck.
    Played {
        /// The card that was played.
        card: Card,
        /// Where the card sat in the hand.
        index: usize,
    },
    /// The player had no match and drew from the hidden deck.
    Drew {
        /// The card that was drawn.
        card: Card,
        /// Whether the hidden deck had to be refilled first.
        recycled: bool,
    },
    /// The player had no match and there was nothing left to draw.
    Stuck,
}

/// Result of trying to refill the hidden deck from the played deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecycleOutcome {
    /// Cards were moved to the hidden deck and shuffled.
    Recycled {
        /// Number of cards moved.
        moved: usize,
    },
    /// The played deck had fewer than two cards, so nothing moved.
    Skipped,
}

/// Why [`Game::run`](crate::Game::run) stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The player emptied their hand.
    Won(Player),
    /// The configured turn limit was reached.
    TurnLimit,
    /// Both players were stuck one after the other, so no further turn can
    /// change the table.
    Deadlock,
}

/// Summary of a game played through [`Game::run`](crate::Game::run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// Why the game stopped.
    pub reason: StopReason,
    /// Total turns played.
    pub turns: usize,
}
