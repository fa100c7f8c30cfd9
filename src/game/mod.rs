//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;

pub mod state;
mod turn;

pub use state::{GameStatus, Player};

/// A two-player matching game.
///
/// The game owns the hidden (draw) deck, the played (discard) deck and both
/// hands. Cards only ever move between these four decks, so their total
/// stays at `52 × packs` for the whole game.
///
/// A typical driver calls [`Game::new`], then [`Game::start`], then
/// [`Game::step`] until [`Game::status`] is [`GameStatus::Won`], or lets
/// [`Game::run`] do the looping.
#[derive(Debug, Clone)]
pub struct Game {
    /// The face-down draw pile.
    pub hidden: Deck,
    /// The face-up discard pile. Its top is the card to match.
    pub played: Deck,
    /// Player hands, indexed by [`Player`].
    pub hands: [Deck; 2],
    /// Game options.
    pub options: GameOptions,
    /// Current game status.
    status: GameStatus,
    /// Player whose turn [`Game::step`] plays next.
    next_player: Player,
    /// Turns played so far.
    turns: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The hidden deck is filled with `options.packs` ordered packs and
    /// shuffled. The played deck and both hands start empty.
    ///
    /// # Example
    ///
    /// ```
    /// use matchdeck::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.hidden.len(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut hidden = Deck::ordered(options.packs);
        hidden.shuffle(&mut rng);
        debug!(packs = options.packs, cards = hidden.len(), "shuffled hidden deck");

        Self::with_rng(options, rng, hidden)
    }

    /// Creates a game around a prepared hidden deck, which is used as is.
    ///
    /// The seed still drives every later shuffle.
    #[must_use]
    pub fn from_decks(options: GameOptions, seed: u64, hidden: Deck) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed), hidden)
    }

    fn with_rng(options: GameOptions, rng: ChaCha8Rng, hidden: Deck) -> Self {
        Self {
            hidden,
            played: Deck::new(),
            hands: [Deck::new(), Deck::new()],
            options,
            status: GameStatus::Ongoing,
            next_player: Player::One,
            turns: 0,
            rng,
        }
    }

    /// Deals the opening hands.
    ///
    /// Cards come off the top of the hidden deck one at a time, alternating
    /// between player one and player two, until each holds
    /// `options.hand_size` cards. Each card goes on top of its hand.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidState`] if the game is over or cards were
    /// already dealt or played, and [`DealError::Deck`] if the hidden deck
    /// runs out. Cards dealt before running out stay in the hands.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.status != GameStatus::Ongoing
            || !self.played.is_empty()
            || self.hands.iter().any(|hand| !hand.is_empty())
        {
            return Err(DealError::InvalidState);
        }

        for _ in 0..self.options.hand_size {
            for hand in &mut self.hands {
                let card = self.hidden.draw_top()?;
                hand.insert_top(card);
            }
        }

        debug!(
            hand_size = self.options.hand_size,
            hidden = self.hidden.len(),
            "dealt opening hands"
        );
        Ok(())
    }

    /// Sorts both hands by rank, then suit.
    pub fn sort_hands(&mut self) {
        for hand in &mut self.hands {
            hand.sort();
        }
    }

    /// Turns the top hidden card face up to start the played deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidState`] if the game is over or the played
    /// deck already has cards, and [`DealError::Deck`] if the hidden deck is
    /// empty.
    pub fn flip_first_card(&mut self) -> Result<Card, DealError> {
        if self.status != GameStatus::Ongoing || !self.played.is_empty() {
            return Err(DealError::InvalidState);
        }

        let card = self.hidden.draw_top()?;
        self.played.insert_top(card);
        debug!(%card, "first card placed");
        Ok(card)
    }

    /// Deals, sorts both hands and flips the first card.
    ///
    /// Returns the first card on the played deck.
    ///
    /// # Errors
    ///
    /// Returns an error if [`Game::deal`] or [`Game::flip_first_card`] fails.
    pub fn start(&mut self) -> Result<Card, DealError> {
        self.deal()?;
        self.sort_hands();
        self.flip_first_card()
    }

    /// Returns the hand of `player`.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Deck {
        &self.hands[player.index()]
    }

    /// Returns the current game status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player whose turn [`Game::step`] plays next.
    #[must_use]
    pub const fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the number of turns played so far.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Returns the number of cards across all four decks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hidden.len() + self.played.len() + self.hands.iter().map(Deck::len).sum::<usize>()
    }
}
