//! Game configuration options.

/// Smallest bet accepted.
pub const MIN_BET: usize = 1;

/// Largest bet accepted.
pub const MAX_BET: usize = 5;

/// Configuration options for a video poker session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use jacks::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_credits(250)
///     .with_auto_bet(5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Credits at the start of the session.
    pub starting_credits: usize,
    /// Bet placed automatically for every hand (0 to disable).
    pub auto_bet: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_credits: 100,
            auto_bet: 0,
        }
    }
}

impl GameOptions {
    /// Sets the starting credits.
    ///
    /// # Example
    ///
    /// ```
    /// use jacks::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_credits(500);
    /// assert_eq!(options.starting_credits, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_credits(mut self, credits: usize) -> Self {
        self.starting_credits = credits;
        self
    }

    /// Sets the bet re-placed after every settled hand.
    ///
    /// The game ignores values outside `1..=5`, or above the starting
    /// credits, when it is created.
    ///
    /// # Example
    ///
    /// ```
    /// use jacks::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_bet(3);
    /// assert_eq!(options.auto_bet, 3);
    /// ```
    #[must_use]
    pub const fn with_auto_bet(mut self, bet: usize) -> Self {
        self.auto_bet = bet;
        self
    }
}
