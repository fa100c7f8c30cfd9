//! CLI matching game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use matchdeck::{Card, Deck, Game, GameOptions, GameStatus, Player, Suit, TurnOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Matching card game (type 'q' to quit)");

    let Some(packs) = prompt_usize("Enter the number of card packs to be used in the game: ")
    else {
        return ExitCode::SUCCESS;
    };
    if packs == 0 {
        println!("At least one pack is needed.");
        return ExitCode::FAILURE;
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_packs(packs);
    let mut game = Game::new(options, seed);

    let first = match game.start() {
        Ok(card) => card,
        Err(err) => {
            println!("Setup error: {err}");
            return ExitCode::FAILURE;
        }
    };

    print_hands(&game);
    println!("First card has been placed: {}", format_card(&first));

    while game.status() == GameStatus::Ongoing {
        let player = game.next_player();
        let outcome = match game.step() {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("Turn error: {err}");
                return ExitCode::FAILURE;
            }
        };

        match outcome {
            TurnOutcome::Played { card, .. } => {
                println!("{player} played a matching card {}", format_card(&card));
            }
            TurnOutcome::Drew { card, recycled } => {
                if recycled {
                    println!("\nRecycled decks!\n");
                    println!("Hidden: {} cards", game.hidden.len());
                    println!("Played: {}", format_deck(&game.played));
                }
                println!("{player} had no match and drew {}", format_card(&card));
            }
            TurnOutcome::Stuck => {
                println!("{player} had no match. No cards left to draw.");
                if game.played.len() < 2 && game.hidden.is_empty() && !any_match(&game) {
                    println!("Neither player can move. Game abandoned.");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    if let GameStatus::Won(winner) = game.status() {
        println!("\n{winner} wins after {} turns!", game.turns());
    }
    ExitCode::SUCCESS
}

fn any_match(game: &Game) -> bool {
    Player::ALL
        .into_iter()
        .any(|player| Game::find_match_in_hand(game.hand(player), &game.played).is_some())
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_hands(game: &Game) {
    for player in Player::ALL {
        println!("{player}: {}", format_deck(game.hand(player)));
    }
    println!();
}

fn format_deck(deck: &Deck) -> String {
    if deck.is_empty() {
        return "(empty)".to_string();
    }
    deck.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Heart | Suit::Diamond => "31",
        Suit::Club => "32",
        Suit::Spade => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
