//! Headless endurance run.
//!
//! Plays a fixed number of hands with a fixed bet and a simple hold strategy,
//! then prints the session summary. Set `RUST_LOG=debug` to see every deal,
//! shuffle, and draw.

use std::env;

use jacks::{Game, GameOptions, HandRank, HandSlot, Rank};

const DEFAULT_HANDS: usize = 25;
const BET: usize = 5;

/// Holds any jack or better, and any rank showing three or more times.
fn should_hold(slot: &HandSlot, hand: &[HandSlot]) -> bool {
    let rank = slot.card().rank;
    let same_rank = hand.iter().filter(|other| other.card().rank == rank).count();
    rank >= Rank::Jack || same_rank >= 3
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let hands = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_HANDS);
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(7);

    let mut game = Game::new(GameOptions::default().with_auto_bet(BET), seed);
    log::info!("Starting endurance test with {hands} hands");

    for hand in 1..=hands {
        if game.current_bet() == 0 {
            log::info!("Out of credits for a bet of {BET}");
            break;
        }

        log::info!("Hand {hand}: bet {BET}");
        if game.deal_initial_hand().is_err() {
            break;
        }

        let slots = game.hand().slots().to_vec();
        for (index, slot) in slots.iter().enumerate() {
            if should_hold(slot, &slots) {
                let _ = game.hold_card(index);
            }
        }

        if game.draw_new_cards().is_err() {
            break;
        }
        let Ok(evaluation) = game.evaluate_hand() else {
            break;
        };
        if game.collect_winnings(evaluation.payout).is_err() {
            break;
        }

        let stats = game.profit_stats();
        log::info!(
            "Credits {}, profit {} ({:.1}%), high {}, low {}",
            stats.current_credits,
            stats.net_profit,
            stats.profit_percentage,
            stats.max_credits,
            stats.min_credits
        );
    }

    let stats = game.session_stats();
    let profit = game.profit_stats();
    println!("=== Endurance Test Results ===");
    println!("Hands played:     {}", stats.hands_played());
    println!("Starting credits: {}", game.starting_credits());
    println!("Final credits:    {}", game.credits());
    println!("Minimum credits:  {}", profit.min_credits);
    println!("Maximum credits:  {}", profit.max_credits);
    println!("Net profit/loss:  {}", profit.net_profit);
    println!("Total bets:       {}", stats.total_wagered());
    println!("Total winnings:   {}", stats.total_won());
    println!("Winning hands:    {}", stats.winning_hands());
    println!("Win rate:         {:.1}%", stats.win_rate());
    println!("Return rate:      {:.1}%", stats.return_rate());
    println!();
    println!("Hand type breakdown:");
    for rank in HandRank::ALL.iter().rev() {
        let count = stats.count(*rank);
        if count > 0 {
            println!("  {:<16} {count}", rank.label());
        }
    }
}
