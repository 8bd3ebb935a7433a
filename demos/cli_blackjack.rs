//! CLI blackjack example.
//!
//! Set `RUST_LOG=bjsolo=debug` to watch the engine's decisions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Card, Game, GameOptions, Hand, Leaderboard, Outcome, Phase, ScoreStore, Suit};
use tracing_subscriber::EnvFilter;

const CHIPS: [u64; 4] = [25, 100, 500, 1000];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let mut leaderboard = Leaderboard::new();

    let name = match prompt_line("Your name: ").as_str() {
        "" => "player".to_string(),
        name => name.to_string(),
    };

    loop {
        if game.is_game_over() {
            println!(
                "Game over after {} round(s) with {} left.",
                game.rounds_played(),
                game.bankroll()
            );
            print_leaderboard(&leaderboard);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    if let Err(err) = game.reset() {
                        println!("Reset error: {err}");
                        break;
                    }
                    continue;
                }
                _ => break,
            }
        }

        if !place_bets(&mut game) {
            break;
        }

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            continue;
        }

        while game.phase() == Phase::PlayerTurn {
            print_table(&game, false);
            println!("{}", format_actions(&game));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double_down().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        while game.phase() == Phase::DealerTurn {
            match game.dealer_step() {
                Ok(Some(card)) => println!("Dealer draws {}.", format_card(&card)),
                Ok(None) => println!("Dealer stands."),
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        match game.resolve() {
            Ok(result) => {
                print_table(&game, true);
                let verdict = match result.outcome {
                    Outcome::Win => "You win!",
                    Outcome::Blackjack => "Blackjack!",
                    Outcome::Lose => "You lose.",
                    Outcome::Push => "Push.",
                };
                println!(
                    "{verdict} ({:?}) Payout: {} (net {}) Bankroll: {}",
                    result.resolution, result.payout, result.net, result.bankroll
                );
                leaderboard.submit(result.score_entry(&name, game.options().starting_bankroll));
            }
            Err(err) => println!("Showdown error: {err}"),
        }
    }
}

/// Collects chips until the player deals. Returns `false` to quit.
fn place_bets(game: &mut Game) -> bool {
    loop {
        println!(
            "\nRound {} of {} | bankroll {} | bet {}",
            game.rounds_played() + 1,
            game.options().round_cap,
            game.bankroll(),
            game.bet()
        );
        let chips: Vec<String> = CHIPS.iter().map(u64::to_string).collect();
        let input = prompt_line(&format!(
            "Chip ({}), a custom amount, 'p' to play, 'q' to quit: ",
            chips.join("/")
        ));

        match input.as_str() {
            "q" | "quit" => return false,
            "p" | "play" => {
                if game.bet() == 0 {
                    println!("Place a bet first.");
                    continue;
                }
                return true;
            }
            _ => {}
        }

        match input.parse::<u64>() {
            Ok(amount) => {
                if let Err(err) = game.place_bet(amount) {
                    println!("Bet error: {err}");
                }
            }
            Err(_) => println!("Please enter a number."),
        }
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

fn print_table(game: &Game, reveal: bool) {
    let snapshot = game.snapshot();
    let dealer = game.dealer_hand();

    if reveal || !snapshot.conceals_dealer() {
        println!(
            "\nDealer: {} (value {})",
            format_hand(dealer),
            snapshot.dealer_total
        );
    } else {
        let up = dealer.cards().first().map(format_card).unwrap_or_default();
        println!("\nDealer: {up} ?? (value ?)");
    }

    println!(
        "You:    {} (value {}) | bet {}",
        format_hand(game.player_hand()),
        snapshot.player_total,
        snapshot.bet
    );
    println!();
}

fn print_leaderboard(leaderboard: &Leaderboard) {
    if leaderboard.is_empty() {
        return;
    }
    println!("Leaderboard:");
    for entry in leaderboard.ranked() {
        let marker = if entry.win { "W" } else { " " };
        println!("  {marker} {:<12} {:>6}", entry.name, entry.net);
    }
}

fn format_actions(game: &Game) -> String {
    let legal = game.legal_actions();
    let parts = [
        format_action("hit", "h", legal.hit),
        format_action("stand", "s", legal.stand),
        format_action("double", "d", legal.double_down),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.code(), color_code)
}
