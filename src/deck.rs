//! Ordered card collections used for draw piles and hands.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::DeckError;

/// An ordered collection of cards.
///
/// Position `0` is the top of the deck. Duplicates are allowed, so a deck can
/// hold any number of packs. Cards move between decks by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates an ordered deck of `packs` full packs.
    ///
    /// Cards follow the canonical pack order (see [`Card::from_index`]) and
    /// each card appears once per pack in a row before the next one.
    ///
    /// ```
    /// use matchdeck::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::ordered(2);
    /// assert_eq!(deck.len(), 2 * DECK_SIZE);
    /// assert_eq!(deck.get(0), deck.get(1));
    /// ```
    #[must_use]
    pub fn ordered(packs: usize) -> Self {
        let mut cards = VecDeque::with_capacity(packs * DECK_SIZE);
        for card in (0..DECK_SIZE).filter_map(Card::from_index) {
            for _ in 0..packs {
                cards.push_back(card);
            }
        }
        Self { cards }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the card at `position`, counted from the top.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Places a card on top of the deck.
    pub fn insert_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck has no cards.
    pub fn draw_top(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::EmptyDeck)
    }

    /// Inserts a card so that it ends up at `position`.
    ///
    /// A position equal to the length appends to the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if `position` is greater than the
    /// number of cards.
    pub fn insert_at(&mut self, position: usize, card: Card) -> Result<(), DeckError> {
        let len = self.cards.len();
        if position > len {
            return Err(DeckError::OutOfRange { position, len });
        }
        self.cards.insert(position, card);
        Ok(())
    }

    /// Removes and returns the card at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if there is no card at `position`.
    pub fn remove_at(&mut self, position: usize) -> Result<Card, DeckError> {
        let len = self.cards.len();
        self.cards
            .remove(position)
            .ok_or(DeckError::OutOfRange { position, len })
    }

    /// Returns the position of the first card, from the top, satisfying
    /// `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Card) -> bool,
    {
        self.cards.iter().position(predicate)
    }

    /// Returns an iterator over the cards from top to bottom.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Copies the cards, top first, into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Shuffles the deck in place.
    ///
    /// Fisher-Yates: each step draws a uniform position among the cards not
    /// yet placed and moves that card to the front of the placed region at
    /// the bottom. Every ordering is equally likely and every card is moved
    /// at most once. Decks with fewer than two cards are left untouched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cards = self.cards.make_contiguous();
        let mut remaining = cards.len();
        while remaining > 1 {
            let pick = rng.random_range(0..remaining);
            remaining -= 1;
            cards.swap(pick, remaining);
        }
    }

    /// Sorts the deck by rank, then suit, keeping equal cards in order.
    ///
    /// Bubble sort: passes of adjacent swaps stop as soon as a pass swaps
    /// nothing, and each pass ignores the tail the previous one settled.
    pub fn sort(&mut self) {
        let mut end = self.cards.len();
        let mut swapped = true;
        while swapped && end > 1 {
            swapped = false;
            for i in 1..end {
                if self.cards[i - 1] > self.cards[i] {
                    self.cards.swap(i - 1, i);
                    swapped = true;
                }
            }
            end -= 1;
        }
    }

    /// Returns whether the deck is in ascending rank and suit order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.cards
            .iter()
            .zip(self.cards.iter().skip(1))
            .all(|(a, b)| a <= b)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return writeln!(f, "(empty)");
        }
        for (index, card) in self.cards.iter().enumerate() {
            writeln!(f, "{}: {card}", index + 1)?;
        }
        Ok(())
    }
}
