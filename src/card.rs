//! Card types and canonical deck ordering.

use core::cmp::Ordering;
use core::fmt;

/// Card suit.
///
/// Suits are ordered `Club < Spade < Heart < Diamond`, which is the secondary
/// sort key of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Spades.
    Spade,
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Spade, Self::Heart, Self::Diamond];

    const NAMES: [&'static str; 4] = ["Club", "Spade", "Heart", "Diamond"];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

/// Card rank, ordered from `Two` up to `Ace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    const NAMES: [&'static str; 13] = [
        "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
        "King", "Ace",
    ];

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

/// A playing card.
///
/// Cards compare by rank first and suit second, so sorting a hand groups
/// equal ranks together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the card at `index` of a canonical pack.
    ///
    /// The suit is `index / 13` and the rank is `index % 13`, so a pack runs
    /// through every club first, then spades, hearts and diamonds. Returns
    /// `None` when `index` is not below [`DECK_SIZE`].
    ///
    /// ```
    /// use matchdeck::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::from_index(0), Some(Card::new(Suit::Club, Rank::Two)));
    /// assert_eq!(Card::from_index(51), Some(Card::new(Suit::Diamond, Rank::Ace)));
    /// assert_eq!(Card::from_index(52), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        let ranks = Rank::ALL.len();
        Some(Self::new(Suit::ALL[index / ranks], Rank::ALL[index % ranks]))
    }

    /// Returns whether this card shares a suit or a rank with `other`.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit.name(), self.rank.name())
    }
}

/// Number of cards per pack.
pub const DECK_SIZE: usize = 52;
