//! CLI blackjack demo.
//!
//! Run with `--verbose` to see the engine's trace events.

use std::io::{self, Write};

use starjack::{Card, DealerCard, Game, GameOptions, GameState, RoundSnapshot};
use tracing::Level;

const CHIPS: [usize; 4] = [10, 25, 50, 100];

fn main() {
    let verbose = std::env::args().any(|arg| arg == "--verbose" || arg == "-v");
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let mut game = Game::from_entropy(GameOptions::default());
    println!("{}", game.message());

    loop {
        print_ledger(&game);

        if game.ledger().bankroll() == 0 && game.ledger().current_bet() == 0 {
            println!("You are out of money. Type 'r' to reset or 'q' to quit.");
        }

        println!("{}", format_betting_actions(&game));
        let input = prompt_line("Action: ");

        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            "r" | "reset" => {
                game.reset();
                println!("{}", game.message());
            }
            "c" | "clear" => match game.clear_bet() {
                Ok(_) => println!("{}", game.message()),
                Err(err) => println!("Clear error: {err}"),
            },
            "d" | "deal" => match game.deal() {
                Ok(round) => play_round(&mut game, round),
                Err(err) => println!("Deal error: {err}"),
            },
            other => match other.parse::<usize>() {
                Ok(amount) => match game.place_bet(amount) {
                    Ok(_) => println!("{}", game.message()),
                    Err(err) => println!("Bet error: {err}"),
                },
                Err(_) => println!("Unknown action."),
            },
        }
    }
}

fn play_round(game: &mut Game, mut round: RoundSnapshot) {
    while round.state == GameState::PlayerTurn {
        print_table(&round);

        let result = match prompt_line("[h]it [s]tand: ").as_str() {
            "h" | "hit" => game.hit(),
            "s" | "stand" => game.stand(),
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(next) => round = next,
            Err(err) => {
                println!("Action error: {err}");
                return;
            }
        }
    }

    print_table(&round);
    if let Some(result) = game.last_result() {
        println!("Payout: {} (net {})", result.payout, result.net());
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_ledger(game: &Game) {
    let ledger = game.ledger();
    println!(
        "\nBankroll: ${} | Bet: ${} | Wins: {} | Losses: {}",
        ledger.bankroll(),
        ledger.current_bet(),
        ledger.wins(),
        ledger.losses()
    );
}

fn print_table(round: &RoundSnapshot) {
    let dealer_score = if round.dealer_score_partial {
        "?".to_string()
    } else {
        round.dealer_score.to_string()
    };
    println!(
        "\nDealer: {} (score {dealer_score})",
        format_dealer(&round.dealer_cards)
    );
    println!(
        "You:    {} (score {})",
        format_hand(&round.player_cards),
        round.player_score
    );
    println!("{}\n", round.message);
}

fn format_betting_actions(game: &Game) -> String {
    let bankroll = game.ledger().bankroll();
    let chips = CHIPS
        .iter()
        .map(|&chip| format_action(&chip.to_string(), bankroll >= chip))
        .collect::<Vec<_>>()
        .join(" ");
    let deal = format_action("[d]eal", game.can_deal());
    let clear = format_action("[c]lear", game.ledger().current_bet() > 0);
    format!("Chips: {chips} (or any amount) | {deal} {clear} [r]eset [q]uit")
}

fn format_action(label: &str, allowed: bool) -> String {
    if allowed {
        colorize(label, "32")
    } else {
        colorize(label, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(cards: &[DealerCard]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }

    cards
        .iter()
        .map(|card| card.card().map_or_else(|| "??".to_string(), |c| format_card(&c)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.is_red() { "31" } else { "34" };
    colorize(
        &format!("{}{}", card.rank_label(), card.suit.symbol()),
        color_code,
    )
}
