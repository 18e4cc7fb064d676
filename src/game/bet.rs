use crate::card::CardList;
use crate::error::{BetError, DealError};
use crate::hand::HAND_SIZE;
use crate::options::{MAX_BET, MIN_BET};
use crate::sink::EventSink;

use super::{Game, GameState};

impl<S: EventSink> Game<S> {
    /// Places the bet for the next hand.
    ///
    /// Credits are not deducted until the hand is settled with
    /// [`Game::collect_winnings`]. Placing a second bet replaces the first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the amount is
    /// outside `1..=5`, or the amount exceeds the credit balance.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        let state = self.state;
        if state != GameState::Betting {
            self.sink.warning(format_args!(
                "Attempted to bet {amount} in invalid state: {state}"
            ));
            return Err(BetError::InvalidState);
        }

        let credits = self.credits;
        if !(MIN_BET..=MAX_BET).contains(&amount) {
            self.sink.warning(format_args!(
                "Invalid bet amount: {amount}, Credits: {credits}"
            ));
            return Err(BetError::OutOfRange(amount));
        }

        if amount > credits {
            self.sink.warning(format_args!(
                "Insufficient credits for bet: {amount}, Credits: {credits}"
            ));
            return Err(BetError::InsufficientCredits);
        }

        self.current_bet = amount;
        self.sink.info(format_args!(
            "Bet placed: {amount}, Credits remaining: {credits}"
        ));

        Ok(())
    }

    /// Places `amount` now and again after every settled hand.
    ///
    /// An amount of 0 turns the auto bet off without touching the current bet.
    /// After a hand is settled the auto bet is only placed if it is still
    /// affordable.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::place_bet`] for a non-zero amount.
    pub fn set_auto_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            self.auto_bet = 0;
            self.sink.info(format_args!("Auto bet disabled"));
            return Ok(());
        }

        self.place_bet(amount)?;
        self.auto_bet = amount;
        self.sink.info(format_args!("Auto bet set to {amount}"));

        Ok(())
    }

    /// Deals a fresh hand of five face-up cards.
    ///
    /// The deck is rebuilt from all 52 cards and shuffled before dealing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or no bet has
    /// been placed.
    pub fn deal_initial_hand(&mut self) -> Result<(), DealError> {
        let state = self.state;
        if state != GameState::Betting {
            self.sink
                .warning(format_args!("Attempted to deal in invalid state: {state}"));
            return Err(DealError::InvalidState);
        }

        let bet = self.current_bet;
        if bet == 0 {
            self.sink
                .warning(format_args!("Attempted to deal without a bet"));
            return Err(DealError::NoBet);
        }

        self.sink
            .info(format_args!("Dealing initial hand with bet: {bet}"));

        // Start fresh with all 52 cards
        self.initialize_deck();
        self.hand.clear();
        self.initial_hand.clear();

        for index in 0..HAND_SIZE {
            let Some(card) = self.draw() else {
                self.sink
                    .error(format_args!("Deck ran out while dealing card {index}"));
                break;
            };
            self.hand.deal(card);
            self.sink.debug(format_args!("Dealt card: {card}"));
        }

        self.initial_hand.extend(self.hand.cards());
        self.sink.info(format_args!(
            "Initial hand: {}",
            CardList(&self.initial_hand)
        ));

        self.state = GameState::Holding;

        Ok(())
    }
}
