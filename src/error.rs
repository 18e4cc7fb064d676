//! Error types for game operations.
//!
//! Every error leaves the game exactly as it was before the call.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is outside the allowed range.
    #[error("bet amount {0} is outside 1..=5")]
    OutOfRange(usize),
    /// Insufficient credits.
    #[error("insufficient credits")]
    InsufficientCredits,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
}

/// Errors that can occur when holding a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HoldError {
    /// Invalid game state for holding.
    #[error("invalid game state for holding")]
    InvalidState,
    /// No card at this index.
    #[error("no card at index {0}")]
    OutOfRange(usize),
    /// The card is face down.
    #[error("card at index {0} is face down")]
    FaceDown(usize),
}

/// Errors that can occur during the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game state for drawing.
    #[error("invalid game state for drawing")]
    InvalidState,
}

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluateError {
    /// Invalid game state for evaluation.
    #[error("invalid game state for evaluation")]
    InvalidState,
}

/// Errors that can occur when settling a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectError {
    /// Invalid game state for collecting winnings.
    #[error("invalid game state for collecting winnings")]
    InvalidState,
}
