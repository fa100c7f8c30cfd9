//! Game integration tests.

use matchdeck::{
    Card, DECK_SIZE, DealError, Deck, DeckError, Game, GameOptions, GameStatus, Player, Rank,
    RecycleOutcome, StopReason, Suit, TurnError, TurnOutcome,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn deck_of(cards: &[Card]) -> Deck {
    cards.iter().copied().collect()
}

/// A game with empty hidden and played decks, ready for hand-built tables.
fn empty_game() -> Game {
    Game::from_decks(GameOptions::default(), 1, Deck::new())
}

#[test]
fn new_game_shuffles_requested_packs() {
    let game = Game::new(GameOptions::default().with_packs(2), 9);
    assert_eq!(game.hidden.len(), 2 * DECK_SIZE);
    assert!(game.played.is_empty());
    assert!(game.hand(Player::One).is_empty());
    assert!(game.hand(Player::Two).is_empty());
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert_eq!(game.next_player(), Player::One);
    assert_ne!(game.hidden, Deck::ordered(2));

    let again = Game::new(GameOptions::default().with_packs(2), 9);
    assert_eq!(game.hidden, again.hidden);
}

#[test]
fn deal_gives_eight_cards_each() {
    let mut game = Game::new(GameOptions::default(), 42);
    game.deal().unwrap();

    assert_eq!(game.hand(Player::One).len(), 8);
    assert_eq!(game.hand(Player::Two).len(), 8);
    assert_eq!(game.hidden.len(), 36);
    assert_eq!(game.total_cards(), DECK_SIZE);
}

#[test]
fn deal_alternates_and_stacks_on_top() {
    let mut game = Game::from_decks(GameOptions::default(), 1, Deck::ordered(1));
    game.deal().unwrap();

    // Player one receives cards 0, 2, ..., 14; the last one dealt is on top.
    assert_eq!(game.hand(Player::One).top().copied(), Card::from_index(14));
    assert_eq!(game.hand(Player::One).get(7).copied(), Card::from_index(0));
    assert_eq!(game.hand(Player::Two).top().copied(), Card::from_index(15));
    assert_eq!(game.hand(Player::Two).get(7).copied(), Card::from_index(1));
    assert_eq!(game.hidden.top().copied(), Card::from_index(16));
}

#[test]
fn deal_respects_hand_size() {
    let mut game = Game::new(GameOptions::default().with_hand_size(5), 3);
    game.deal().unwrap();
    assert_eq!(game.hand(Player::One).len(), 5);
    assert_eq!(game.hand(Player::Two).len(), 5);
    assert_eq!(game.hidden.len(), DECK_SIZE - 10);
}

#[test]
fn deal_errors() {
    let mut game = Game::new(GameOptions::default().with_packs(0), 1);
    assert_eq!(
        game.deal().unwrap_err(),
        DealError::Deck(DeckError::EmptyDeck)
    );

    let mut short = Game::from_decks(
        GameOptions::default(),
        1,
        deck_of(&[card(Suit::Heart, Rank::Two), card(Suit::Club, Rank::Five)]),
    );
    assert_eq!(
        short.deal().unwrap_err(),
        DealError::Deck(DeckError::EmptyDeck)
    );
    assert_eq!(short.total_cards(), 2);

    let mut dealt = Game::new(GameOptions::default(), 1);
    dealt.deal().unwrap();
    assert_eq!(dealt.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn start_sorts_hands_and_flips_first_card() {
    let mut game = Game::new(GameOptions::default(), 5);
    let first = game.start().unwrap();

    assert_eq!(game.played.to_vec(), vec![first]);
    assert_eq!(game.hidden.len(), DECK_SIZE - 17);
    assert!(game.hand(Player::One).is_sorted());
    assert!(game.hand(Player::Two).is_sorted());
    assert_eq!(game.total_cards(), DECK_SIZE);

    assert_eq!(game.flip_first_card().unwrap_err(), DealError::InvalidState);
}

#[test]
fn find_match_prefers_lowest_index() {
    let played = deck_of(&[card(Suit::Heart, Rank::King)]);

    let hand = deck_of(&[card(Suit::Heart, Rank::Two), card(Suit::Spade, Rank::Five)]);
    assert_eq!(Game::find_match_in_hand(&hand, &played), Some(0));

    let hand = deck_of(&[
        card(Suit::Club, Rank::Three),
        card(Suit::Club, Rank::King),
        card(Suit::Heart, Rank::Four),
    ]);
    assert_eq!(Game::find_match_in_hand(&hand, &played), Some(1));
}

#[test]
fn find_match_without_candidates() {
    let played = deck_of(&[card(Suit::Heart, Rank::King)]);
    let hand = deck_of(&[card(Suit::Club, Rank::Three), card(Suit::Diamond, Rank::Four)]);
    assert_eq!(Game::find_match_in_hand(&hand, &played), None);

    assert_eq!(Game::find_match_in_hand(&hand, &Deck::new()), None);
    assert_eq!(Game::find_match_in_hand(&Deck::new(), &played), None);
}

#[test]
fn recycle_keeps_top_played_card() {
    let a = card(Suit::Heart, Rank::King);
    let b = card(Suit::Club, Rank::Three);
    let c = card(Suit::Diamond, Rank::Four);

    let mut game = empty_game();
    game.played = deck_of(&[a, b, c]);

    assert_eq!(game.recycle_hidden(), RecycleOutcome::Recycled { moved: 2 });
    assert_eq!(game.played.to_vec(), vec![a]);

    let mut hidden = game.hidden.to_vec();
    hidden.sort();
    assert_eq!(hidden, vec![b, c]);
}

#[test]
fn recycle_skips_small_played_deck() {
    let mut game = empty_game();
    assert_eq!(game.recycle_hidden(), RecycleOutcome::Skipped);

    game.played = deck_of(&[card(Suit::Heart, Rank::King)]);
    game.hidden = deck_of(&[card(Suit::Spade, Rank::Six)]);
    assert_eq!(game.recycle_hidden(), RecycleOutcome::Skipped);
    assert_eq!(game.played.len(), 1);
    assert_eq!(game.hidden.len(), 1);
}

#[test]
fn play_turn_lays_matching_card() {
    let mut game = empty_game();
    game.played = deck_of(&[card(Suit::Heart, Rank::King)]);
    game.hands[0] = deck_of(&[
        card(Suit::Club, Rank::Three),
        card(Suit::Heart, Rank::Four),
        card(Suit::Spade, Rank::Nine),
    ]);

    let outcome = game.play_turn(Player::One).unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Played {
            card: card(Suit::Heart, Rank::Four),
            index: 1
        }
    );
    assert_eq!(game.played.top(), Some(&card(Suit::Heart, Rank::Four)));
    assert_eq!(
        game.hand(Player::One).to_vec(),
        vec![card(Suit::Club, Rank::Three), card(Suit::Spade, Rank::Nine)]
    );
    assert_eq!(game.turns(), 1);
}

#[test]
fn play_turn_draws_and_sorts_without_match() {
    let mut game = empty_game();
    game.played = deck_of(&[card(Suit::Heart, Rank::King)]);
    game.hidden = deck_of(&[card(Suit::Club, Rank::Two), card(Suit::Spade, Rank::Ace)]);
    game.hands[1] = deck_of(&[card(Suit::Club, Rank::Three), card(Suit::Diamond, Rank::Four)]);

    let outcome = game.play_turn(Player::Two).unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Drew {
            card: card(Suit::Club, Rank::Two),
            recycled: false
        }
    );
    assert_eq!(
        game.hand(Player::Two).to_vec(),
        vec![
            card(Suit::Club, Rank::Two),
            card(Suit::Club, Rank::Three),
            card(Suit::Diamond, Rank::Four),
        ]
    );
    assert_eq!(game.hidden.len(), 1);
    assert_eq!(game.played.len(), 1);
}

#[test]
fn play_turn_recycles_when_hidden_is_empty() {
    let a = card(Suit::Heart, Rank::King);
    let b = card(Suit::Spade, Rank::Five);
    let c = card(Suit::Spade, Rank::Six);

    let mut game = empty_game();
    game.played = deck_of(&[a, b, c]);
    game.hands[0] = deck_of(&[card(Suit::Club, Rank::Three)]);

    let outcome = game.play_turn(Player::One).unwrap();
    let TurnOutcome::Drew { card: drawn, recycled } = outcome else {
        panic!("expected a draw, got {outcome:?}");
    };
    assert!(recycled);
    assert!(drawn == b || drawn == c);
    assert_eq!(game.played.to_vec(), vec![a]);
    assert_eq!(game.hidden.len(), 1);
    assert_eq!(game.hand(Player::One).len(), 2);
    assert!(game.hand(Player::One).is_sorted());
}

#[test]
fn play_turn_reports_stuck_when_nothing_to_draw() {
    let mut game = empty_game();
    game.played = deck_of(&[card(Suit::Heart, Rank::King)]);
    game.hands[0] = deck_of(&[card(Suit::Club, Rank::Three)]);

    assert_eq!(game.play_turn(Player::One).unwrap(), TurnOutcome::Stuck);
    assert_eq!(game.played.len(), 1);
    assert_eq!(game.hand(Player::One).len(), 1);
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn check_win_and_game_over() {
    let mut game = empty_game();
    game.played = deck_of(&[card(Suit::Heart, Rank::King)]);
    game.hands[0] = deck_of(&[card(Suit::Heart, Rank::Three)]);
    game.hands[1] = deck_of(&[card(Suit::Club, Rank::Two)]);

    assert_eq!(game.check_win(), GameStatus::Ongoing);
    game.play_turn(Player::One).unwrap();
    assert_eq!(game.check_win(), GameStatus::Won(Player::One));

    assert_eq!(
        game.play_turn(Player::Two).unwrap_err(),
        TurnError::GameOver
    );
    assert_eq!(game.step().unwrap_err(), TurnError::GameOver);
    assert_eq!(game.run().unwrap_err(), TurnError::GameOver);
}

#[test]
fn check_win_prefers_player_one() {
    let mut game = empty_game();
    assert_eq!(game.check_win(), GameStatus::Won(Player::One));

    let mut game = empty_game();
    game.hands[0] = deck_of(&[card(Suit::Heart, Rank::Three)]);
    assert_eq!(game.check_win(), GameStatus::Won(Player::Two));

    game.hands[1] = deck_of(&[card(Suit::Heart, Rank::Four)]);
    assert_eq!(game.check_win(), GameStatus::Won(Player::Two));
}

#[test]
fn step_alternates_players() {
    let mut game = Game::new(GameOptions::default(), 17);
    game.start().unwrap();

    assert_eq!(game.next_player(), Player::One);
    game.step().unwrap();
    assert_eq!(game.next_player(), Player::Two);
    game.step().unwrap();
    assert_eq!(game.next_player(), Player::One);
    assert_eq!(game.turns(), 2);
    assert_eq!(game.total_cards(), DECK_SIZE);
}

#[test]
fn run_plays_to_a_stop() {
    for seed in 0..20 {
        let options = GameOptions::default().with_turn_limit(20_000);
        let mut game = Game::new(options, seed);
        game.start().unwrap();

        let summary = game.run().unwrap();
        assert_eq!(summary.turns, game.turns());
        assert_eq!(game.total_cards(), DECK_SIZE);

        match summary.reason {
            StopReason::Won(winner) => {
                assert!(game.hand(winner).is_empty());
                assert_eq!(game.status(), GameStatus::Won(winner));
            }
            StopReason::TurnLimit => assert_eq!(summary.turns, 20_000),
            StopReason::Deadlock => assert_eq!(game.status(), GameStatus::Ongoing),
        }
    }
}

#[test]
fn run_stops_at_turn_limit() {
    let mut game = Game::new(GameOptions::default().with_turn_limit(3), 8);
    game.start().unwrap();

    let summary = game.run().unwrap();
    assert_eq!(summary.reason, StopReason::TurnLimit);
    assert_eq!(summary.turns, 3);
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn run_detects_deadlock() {
    let mut game = empty_game();
    game.played = deck_of(&[card(Suit::Heart, Rank::King)]);
    game.hands[0] = deck_of(&[card(Suit::Club, Rank::Two)]);
    game.hands[1] = deck_of(&[card(Suit::Spade, Rank::Three)]);

    let summary = game.run().unwrap();
    assert_eq!(summary.reason, StopReason::Deadlock);
    assert_eq!(summary.turns, 2);
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn player_display_and_other() {
    assert_eq!(Player::One.to_string(), "Player 1");
    assert_eq!(Player::Two.to_string(), "Player 2");
    assert_eq!(Player::One.other(), Player::Two);
    assert_eq!(Player::Two.other(), Player::One);
}
