use core::mem;

use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::error::TurnError;
use crate::result::{GameSummary, RecycleOutcome, StopReason, TurnOutcome};

use super::{Game, GameStatus, Player};

impl Game {
    /// Finds the first card in `hand` that matches the top of `played`.
    ///
    /// Cards are checked from the top of the hand down, so the lowest index
    /// wins. Returns `None` if `played` is empty or nothing matches.
    ///
    /// ```
    /// use matchdeck::{Card, Deck, Game, Rank, Suit};
    ///
    /// let hand: Deck = [
    ///     Card::new(Suit::Heart, Rank::Two),
    ///     Card::new(Suit::Spade, Rank::Five),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let played: Deck = [Card::new(Suit::Heart, Rank::King)].into_iter().collect();
    ///
    /// assert_eq!(Game::find_match_in_hand(&hand, &played), Some(0));
    /// ```
    #[must_use]
    pub fn find_match_in_hand(hand: &Deck, played: &Deck) -> Option<usize> {
        let target = played.top()?;
        hand.position(|card| card.matches(target))
    }

    /// Refills the hidden deck from the played deck.
    ///
    /// The top played card stays where it is. Every other played card moves
    /// to the hidden deck, which is then shuffled. With fewer than two played
    /// cards there is nothing to move and the decks are left as they are.
    pub fn recycle_hidden(&mut self) -> RecycleOutcome {
        if self.played.len() < 2 {
            debug!(played = self.played.len(), "nothing to recycle");
            return RecycleOutcome::Skipped;
        }

        let mut rest = mem::take(&mut self.played);
        if let Ok(top) = rest.draw_top() {
            self.played.insert_top(top);
        }

        let moved = rest.len();
        self.hidden.extend(rest);
        self.hidden.shuffle(&mut self.rng);

        info!(moved, hidden = self.hidden.len(), "recycled played deck");
        RecycleOutcome::Recycled { moved }
    }

    /// Plays one turn for `player`.
    ///
    /// If the hand holds a card matching the top of the played deck, the
    /// first such card is moved onto the played deck. Otherwise the player
    /// draws from the hidden deck, recycling the played deck first when the
    /// hidden deck is empty, and the hand is re-sorted. When even recycling
    /// leaves nothing to draw, the turn ends as [`TurnOutcome::Stuck`].
    ///
    /// This does not check for a winner; see [`Game::check_win`].
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameOver`] if a player has already won.
    pub fn play_turn(&mut self, player: Player) -> Result<TurnOutcome, TurnError> {
        if self.status != GameStatus::Ongoing {
            return Err(TurnError::GameOver);
        }

        let outcome = match Self::find_match_in_hand(self.hand(player), &self.played) {
            Some(index) => {
                let card = self.hands[player.index()].remove_at(index)?;
                self.played.insert_top(card);
                debug!(%player, %card, index, "played matching card");
                TurnOutcome::Played { card, index }
            }
            None => self.draw_for(player)?,
        };

        self.turns += 1;
        Ok(outcome)
    }

    fn draw_for(&mut self, player: Player) -> Result<TurnOutcome, TurnError> {
        let recycled = self.hidden.is_empty()
            && matches!(self.recycle_hidden(), RecycleOutcome::Recycled { .. });

        if self.hidden.is_empty() {
            info!(%player, "no match and no cards left to draw");
            return Ok(TurnOutcome::Stuck);
        }

        let card = self.hidden.draw_top()?;
        let hand = &mut self.hands[player.index()];
        hand.insert_top(card);
        hand.sort();

        debug!(%player, %card, recycled, "no match, drew a card");
        Ok(TurnOutcome::Drew { card, recycled })
    }

    /// Updates and returns the game status.
    ///
    /// A player whose hand is empty wins. Player one is checked first, so if
    /// both hands were somehow empty player one would be declared the winner.
    /// Once won, the status never changes again.
    pub fn check_win(&mut self) -> GameStatus {
        if self.status != GameStatus::Ongoing {
            return self.status;
        }

        if let Some(winner) = Player::ALL
            .into_iter()
            .find(|&player| self.hand(player).is_empty())
        {
            info!(%winner, turns = self.turns, "player emptied their hand");
            self.status = GameStatus::Won(winner);
        }
        self.status
    }

    /// Plays the next player's turn, checks for a winner and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameOver`] if a player has already won.
    pub fn step(&mut self) -> Result<TurnOutcome, TurnError> {
        let player = self.next_player;
        let outcome = self.play_turn(player)?;
        self.check_win();
        self.next_player = player.other();
        Ok(outcome)
    }

    /// Plays turns until the game stops.
    ///
    /// The game stops when a player wins, when `options.turn_limit` turns
    /// have been played (if non-zero), or when both players are stuck one
    /// after the other, since then no further turn can change anything.
    /// Call this after [`Game::start`]; empty hands count as a win.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameOver`] if a player had already won before
    /// the call.
    pub fn run(&mut self) -> Result<GameSummary, TurnError> {
        if self.status != GameStatus::Ongoing {
            return Err(TurnError::GameOver);
        }

        let mut stuck_in_a_row = 0;
        let reason = loop {
            if let GameStatus::Won(winner) = self.check_win() {
                break StopReason::Won(winner);
            }
            if self.options.turn_limit != 0 && self.turns >= self.options.turn_limit {
                warn!(turns = self.turns, "turn limit reached");
                break StopReason::TurnLimit;
            }
            if stuck_in_a_row >= Player::ALL.len() {
                warn!(turns = self.turns, "both players are stuck");
                break StopReason::Deadlock;
            }

            match self.step()? {
                TurnOutcome::Stuck => stuck_in_a_row += 1,
                _ => stuck_in_a_row = 0,
            }
        };

        Ok(GameSummary {
            reason,
            turns: self.turns,
        })
    }
}
