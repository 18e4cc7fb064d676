use alloc::vec::Vec;

use crate::card::CardList;
use crate::error::{DrawError, HoldError};
use crate::hand::HandSlot;
use crate::sink::EventSink;

use super::{Game, GameState};

impl<S: EventSink> Game<S> {
    /// Toggles whether the card at `index` is kept on the draw.
    ///
    /// Returns the new held value. Calling it twice restores the original value.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in holding state, there is no card
    /// at `index`, or the card is face down.
    pub fn hold_card(&mut self, index: usize) -> Result<bool, HoldError> {
        let state = self.state;
        if state != GameState::Holding {
            self.sink.warning(format_args!(
                "Attempted to hold card {index} in invalid state: {state}"
            ));
            return Err(HoldError::InvalidState);
        }

        let Some(card) = self.hand.get(index).map(HandSlot::card) else {
            self.sink
                .warning(format_args!("No card at index {index}"));
            return Err(HoldError::OutOfRange(index));
        };

        // The index is in range, so `None` here means the card is face down.
        let Some(held) = self.hand.toggle_hold(index) else {
            self.sink
                .warning(format_args!("Card {index} is face down"));
            return Err(HoldError::FaceDown(index));
        };

        let label = if held { "held" } else { "unheld" };
        self.sink
            .info(format_args!("Card {index} ({label}): {card}"));

        Ok(held)
    }

    /// Replaces every card that is not held and moves on to evaluation.
    ///
    /// Each discarded card goes back into the deck and the deck is shuffled
    /// after every single return. Replacements are then dealt from the top
    /// of the deck in slot order, so a discarded card can come straight back.
    /// Afterwards every card is face up and no card is held.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in holding state.
    pub fn draw_new_cards(&mut self) -> Result<(), DrawError> {
        let state = self.state;
        if state != GameState::Holding {
            self.sink
                .warning(format_args!("Attempted to draw in invalid state: {state}"));
            return Err(DrawError::InvalidState);
        }

        self.sink.info(format_args!("Drawing new cards"));

        let discards: Vec<usize> = self
            .hand
            .slots()
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_held())
            .map(|(index, _)| index)
            .collect();

        for &index in &discards {
            if let Some(card) = self.hand.get(index).map(HandSlot::card) {
                self.deck.push(card);
                self.shuffle_remaining_cards();
            }
        }

        let held = self.hand.held_cards();
        self.sink
            .info(format_args!("Held cards: {}", CardList(&held)));

        for &index in &discards {
            let Some(card) = self.draw() else {
                self.sink
                    .error(format_args!("Deck ran out while replacing card {index}"));
                break;
            };
            if let Some(old) = self.hand.replace(index, card) {
                self.sink.debug(format_args!(
                    "Replacing card {index} ({old}) with {card}"
                ));
            }
        }

        self.hand.reveal_all();
        self.hand.release_all();

        let remaining = self.deck.len();
        self.sink
            .info(format_args!("Final hand: {}", self.hand));
        self.sink
            .debug(format_args!("Cards remaining in deck: {remaining}"));

        self.state = GameState::Evaluating;

        Ok(())
    }
}
