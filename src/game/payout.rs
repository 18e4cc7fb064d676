use crate::error::{CollectError, EvaluateError};
use crate::result::{Evaluation, HandRank, ProfitStats};
use crate::sink::EventSink;

use super::{Game, GameState};

impl<S: EventSink> Game<S> {
    /// Scores the final hand against the pay table.
    ///
    /// The evaluation is kept, and [`Game::result_ready`] stays `true`, until
    /// the hand is settled with [`Game::collect_winnings`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in evaluating state.
    pub fn evaluate_hand(&mut self) -> Result<Evaluation, EvaluateError> {
        let state = self.state;
        if state != GameState::Evaluating {
            self.sink.warning(format_args!(
                "Attempted to evaluate in invalid state: {state}"
            ));
            return Err(EvaluateError::InvalidState);
        }

        self.sink.info(format_args!("Evaluating hand"));

        let Some(rank) = self.hand.rank() else {
            let len = self.hand.len();
            self.sink
                .error(format_args!("Cannot evaluate a hand of {len} cards"));
            return Err(EvaluateError::InvalidState);
        };

        let evaluation = Evaluation::new(rank, self.current_bet);
        self.sink.info(format_args!(
            "Hand evaluation: {rank}, Winnings: {}",
            evaluation.payout
        ));
        self.last_evaluation = Some(evaluation);

        Ok(evaluation)
    }

    /// Settles the hand and starts the next one.
    ///
    /// The bet is subtracted first and `amount` is then added, so a losing
    /// hand costs exactly the bet. The credit extremes and session tallies
    /// are updated, the hand and deck are reset, and the game returns to
    /// betting state with the auto bet placed if one is set and affordable.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in evaluating state.
    pub fn collect_winnings(&mut self, amount: usize) -> Result<(), CollectError> {
        let state = self.state;
        if state != GameState::Evaluating {
            self.sink.warning(format_args!(
                "Attempted to collect winnings in invalid state: {state}"
            ));
            return Err(CollectError::InvalidState);
        }

        let bet = self.current_bet;
        self.credits = self.credits.saturating_sub(bet);

        if amount > 0 {
            self.credits = self.credits.saturating_add(amount);
            let credits = self.credits;
            self.sink.info(format_args!(
                "Collected winnings: {amount}, New credits: {credits}"
            ));
        } else {
            let credits = self.credits;
            self.sink.info(format_args!(
                "No winnings. Lost bet of {bet}. Credits: {credits}"
            ));
        }

        self.min_credits = self.min_credits.min(self.credits);
        self.max_credits = self.max_credits.max(self.credits);

        let rank = self
            .last_evaluation
            .map(|evaluation| evaluation.rank)
            .or_else(|| self.hand.rank())
            .unwrap_or(HandRank::NoWin);
        self.stats.record(rank, bet, amount);

        self.current_bet = 0;
        self.reset_for_new_hand();
        self.restore_auto_bet();

        Ok(())
    }

    /// Returns the profit and loss snapshot for the session.
    #[must_use]
    pub fn profit_stats(&self) -> ProfitStats {
        let credits = isize::try_from(self.credits).unwrap_or(isize::MAX);
        let starting = isize::try_from(self.starting_credits).unwrap_or(isize::MAX);
        let net_profit = credits.saturating_sub(starting);

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for credit balances"
        )]
        let profit_percentage = if self.starting_credits == 0 {
            0.0
        } else {
            net_profit as f64 * 100.0 / self.starting_credits as f64
        };

        ProfitStats {
            net_profit,
            profit_percentage,
            max_credits: self.max_credits,
            min_credits: self.min_credits,
            current_credits: self.credits,
        }
    }

    fn reset_for_new_hand(&mut self) {
        let credits = self.credits;
        self.sink
            .info(format_args!("Reset for new hand. Credits: {credits}"));

        self.hand.clear();
        self.initial_hand.clear();
        self.last_evaluation = None;
        self.state = GameState::Betting;
        self.initialize_deck();
    }

    fn restore_auto_bet(&mut self) {
        let bet = self.auto_bet;
        if bet == 0 {
            return;
        }

        let credits = self.credits;
        if bet <= credits {
            self.current_bet = bet;
            self.sink
                .debug(format_args!("Auto bet of {bet} placed"));
        } else {
            self.sink.warning(format_args!(
                "Auto bet of {bet} exceeds credits {credits}, no bet placed"
            ));
        }
    }
}
