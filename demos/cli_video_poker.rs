//! CLI video poker example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use jacks::{Card, Game, GameOptions, GameState, HAND_SIZE, Hand, HandRank, MAX_BET, Suit};

fn main() {
    env_logger::init();
    println!("Jacks or Better (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    print_pay_table();

    loop {
        let credits = game.credits();
        if credits == 0 {
            println!("You are out of credits. Game over.");
            break;
        }

        let max = credits.min(MAX_BET);
        let Some(bet) = prompt_usize(&format!("Credits {credits}. Bet (1-{max}, 0 to quit): "))
        else {
            break;
        };

        if bet == 0 {
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = game.deal_initial_hand() {
            println!("Deal error: {err}");
            continue;
        }

        while game.state() == GameState::Holding {
            print_hand(game.hand());
            let input = prompt_line("Toggle holds (e.g. 1 3 5), Enter to draw: ");
            if input == "q" || input == "quit" {
                return;
            }
            if input.is_empty() {
                if let Err(err) = game.draw_new_cards() {
                    println!("Draw error: {err}");
                }
                break;
            }
            for position in input.split_whitespace() {
                match position.parse::<usize>() {
                    Ok(position @ 1..=HAND_SIZE) => {
                        if let Err(err) = game.hold_card(position - 1) {
                            println!("Hold error: {err}");
                        }
                    }
                    _ => println!("Unknown position: {position}"),
                }
            }
        }

        print_hand(game.hand());
        match game.evaluate_hand() {
            Ok(evaluation) => {
                if evaluation.is_win() {
                    println!("{} pays {}", evaluation.rank, evaluation.payout);
                } else {
                    println!("{}", evaluation.rank);
                }
                if let Err(err) = game.collect_winnings(evaluation.payout) {
                    println!("Collect error: {err}");
                }
            }
            Err(err) => println!("Evaluate error: {err}"),
        }

        let stats = game.profit_stats();
        println!(
            "Net {} ({:.1}%), high {}, low {}\n",
            stats.net_profit, stats.profit_percentage, stats.max_credits, stats.min_credits
        );
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_pay_table() {
    println!("Pays (per credit bet):");
    for rank in HandRank::ALL.iter().rev().filter(|rank| rank.multiplier() > 0) {
        println!("  {:<16} {:>4}", rank.label(), rank.multiplier());
    }
    println!();
}

fn print_hand(hand: &Hand) {
    let mut faces = Vec::new();
    let mut marks = Vec::new();
    for slot in hand.slots() {
        faces.push(if slot.is_face_up() {
            format_card(&slot.card())
        } else {
            "??".to_string()
        });
        marks.push(if slot.is_held() { "HELD" } else { "    " });
    }

    println!();
    println!("  {}", (1..=HAND_SIZE).map(|n| format!("{n:<5}")).collect::<String>());
    println!("  {}", faces.iter().map(|f| pad(f, 5)).collect::<String>());
    println!("  {}", marks.iter().map(|m| format!("{m:<5}")).collect::<String>());
}

// ANSI colour codes do not count towards the visible width.
fn pad(text: &str, width: usize) -> String {
    let visible = strip_ansi(text).chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(visible)))
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (false, _) => out.push(c),
            (true, _) => {}
        }
    }
    out
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
