//! A Jacks or Better video poker engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a single-player session of
//! five-card draw: betting, dealing, holding, drawing, scoring against the
//! Jacks or Better pay table, and settling credits.
//!
//! The engine performs no I/O. Diagnostics are written to an [`EventSink`]
//! chosen at construction; the default [`LogSink`] forwards to the `log`
//! crate.
//!
//! # Example
//!
//! ```no_run
//! use jacks::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(5).unwrap();
//! game.deal_initial_hand().unwrap();
//! game.hold_card(0).unwrap();
//! game.draw_new_cards().unwrap();
//! let evaluation = game.evaluate_hand().unwrap();
//! game.collect_winnings(evaluation.payout).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod sink;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{BetError, CollectError, DealError, DrawError, EvaluateError, HoldError};
pub use game::{Game, GameState};
pub use hand::{HAND_SIZE, Hand, HandSlot, evaluate};
pub use options::{GameOptions, MAX_BET, MIN_BET};
pub use result::{Evaluation, HandRank, ProfitStats, SessionStats};
pub use sink::{EventSink, LogSink, NullSink, RecordingSink};
