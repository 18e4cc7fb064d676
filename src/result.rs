//! Evaluation and session result types.

use core::fmt;

/// Category of a final five-card hand, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// Nothing that pays.
    NoWin,
    /// A single pair of jacks, queens, kings, or aces.
    JacksOrBetter,
    /// Two distinct pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks, mixed suits.
    Straight,
    /// Five cards of one suit, not consecutive.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks of one suit.
    StraightFlush,
    /// Ten through ace of one suit.
    RoyalFlush,
}

impl HandRank {
    /// Number of hand categories.
    pub const COUNT: usize = 10;

    /// All categories, worst first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::NoWin,
        Self::JacksOrBetter,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];

    /// Returns the pay table multiplier applied to the bet.
    #[must_use]
    pub const fn multiplier(self) -> usize {
        match self {
            Self::RoyalFlush => 800,
            Self::StraightFlush => 50,
            Self::FourOfAKind => 25,
            Self::FullHouse => 9,
            Self::Flush => 6,
            Self::Straight => 4,
            Self::ThreeOfAKind => 3,
            Self::TwoPair => 2,
            Self::JacksOrBetter => 1,
            Self::NoWin => 0,
        }
    }

    /// Returns the payout for the given bet.
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        bet * self.multiplier()
    }

    /// Returns the display label of the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RoyalFlush => "Royal Flush",
            Self::StraightFlush => "Straight Flush",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::TwoPair => "Two Pair",
            Self::JacksOrBetter => "Jacks or Better",
            Self::NoWin => "No Win",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of evaluating the final hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// The hand category.
    pub rank: HandRank,
    /// The bet the payout was computed for.
    pub bet: usize,
    /// Credits won (0 for [`HandRank::NoWin`]).
    pub payout: usize,
}

impl Evaluation {
    /// Evaluates a category against a bet.
    #[must_use]
    pub const fn new(rank: HandRank, bet: usize) -> Self {
        Self {
            rank,
            bet,
            payout: rank.payout(bet),
        }
    }

    /// Returns whether the hand paid anything.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.payout > 0
    }
}

/// Profit and loss snapshot for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitStats {
    /// Credits gained (positive) or lost (negative) since the session started.
    pub net_profit: isize,
    /// Net profit as a percentage of the starting credits (0 when starting at 0).
    pub profit_percentage: f64,
    /// Highest balance seen.
    pub max_credits: usize,
    /// Lowest balance seen.
    pub min_credits: usize,
    /// Current balance.
    pub current_credits: usize,
}

/// Running tallies over every settled hand of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    hands_played: usize,
    total_wagered: usize,
    total_won: usize,
    winning_hands: usize,
    counts: [usize; HandRank::COUNT],
}

impl SessionStats {
    /// Records a settled hand.
    pub(crate) fn record(&mut self, rank: HandRank, bet: usize, payout: usize) {
        self.hands_played += 1;
        self.total_wagered = self.total_wagered.saturating_add(bet);
        self.total_won = self.total_won.saturating_add(payout);
        if payout > 0 {
            self.winning_hands += 1;
        }
        self.counts[rank.slot()] += 1;
    }

    /// Number of hands settled.
    #[must_use]
    pub const fn hands_played(&self) -> usize {
        self.hands_played
    }

    /// Sum of all bets.
    #[must_use]
    pub const fn total_wagered(&self) -> usize {
        self.total_wagered
    }

    /// Sum of all payouts.
    #[must_use]
    pub const fn total_won(&self) -> usize {
        self.total_won
    }

    /// Number of hands that paid.
    #[must_use]
    pub const fn winning_hands(&self) -> usize {
        self.winning_hands
    }

    /// Number of settled hands in the given category.
    #[must_use]
    pub const fn count(&self, rank: HandRank) -> usize {
        self.counts[rank.slot()]
    }

    /// Percentage of hands that paid.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        percentage(self.winning_hands, self.hands_played)
    }

    /// Payouts as a percentage of the amount wagered.
    #[must_use]
    pub fn return_rate(&self) -> f64 {
        percentage(self.total_won, self.total_wagered)
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for credit counts"
)]
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
