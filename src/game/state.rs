//! Game state types.

use core::fmt;

/// Phase of the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Accepting a bet for the next hand.
    Betting,
    /// Cards are dealt and the player chooses which to hold.
    Holding,
    /// The draw is complete and the hand can be scored and settled.
    Evaluating,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Betting => "betting",
            Self::Holding => "holding",
            Self::Evaluating => "evaluating",
        })
    }
}
