//! CLI round example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{CardView, Phase, Round, RoundOptions, TableView};

fn main() {
    println!("Blackjack round example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(RoundOptions::default(), seed);

    loop {
        print_table(&round.view());

        let balance = round.balance();
        if balance <= 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_amount(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = round.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        while round.phase() == Phase::PlayerTurn {
            print_table(&round.view());

            match prompt_line("Action ([h]it / [s]tand / [q]uit): ").as_str() {
                "h" | "hit" => {
                    if let Err(err) = round.hit() {
                        println!("Action error: {err}");
                    }
                }
                "s" | "stand" => match round.stand() {
                    Ok(result) => {
                        println!(
                            "Dealer finishes at {} against your {}.",
                            result.dealer_value, result.player_value
                        );
                    }
                    Err(err) => println!("Action error: {err}"),
                },
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        print_table(&round.view());
        println!("{}", round.view().message);
        println!("Balance: {}", round.balance());

        round.start_round();
    }
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

fn prompt_amount(prompt: &str) -> Option<i64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(view: &TableView) {
    let dealer_value = view
        .dealer_value
        .map_or_else(|| String::from("?"), |value| value.to_string());
    println!("\nDealer: {} (value {})", format_dealer(&view.dealer_cards), dealer_value);

    let player: Vec<String> = view
        .player_cards
        .iter()
        .map(|card| card.asset_name())
        .collect();
    println!(
        "Player: {} (value {})",
        player.join(", "),
        view.player_value
    );
    println!("Balance: {} | Bet: {}", view.balance, view.bet);
}

fn format_dealer(cards: &[CardView]) -> String {
    let parts: Vec<String> = cards
        .iter()
        .map(|card_view| {
            if card_view.face_up {
                card_view.card.asset_name()
            } else {
                String::from("[hidden]")
            }
        })
        .collect();
    parts.join(", ")
}
