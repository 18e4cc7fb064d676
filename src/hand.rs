//! The five-card hand and its evaluation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};
use crate::result::HandRank;

/// Number of cards in a video poker hand.
pub const HAND_SIZE: usize = 5;

const WHEEL: [Rank; HAND_SIZE] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];

fn rank_counts(cards: &[Card; HAND_SIZE]) -> [u8; 13] {
    let mut counts = [0; 13];
    for card in cards {
        counts[card.rank.index()] += 1;
    }
    counts
}

fn is_straight(counts: &[u8; 13]) -> bool {
    if counts.iter().any(|&count| count > 1) {
        return false;
    }

    if WHEEL.iter().all(|rank| counts[rank.index()] == 1) {
        return true;
    }

    counts
        .windows(HAND_SIZE)
        .any(|window| window.iter().all(|&count| count == 1))
}

/// Evaluates five cards against the Jacks or Better pay table.
///
/// Categories are checked from best to worst and the first match wins, so a
/// straight flush is never reported as a flush and a full house is never
/// reported as three of a kind.
///
/// # Example
///
/// ```
/// use jacks::{Card, HandRank, Rank, Suit, evaluate};
///
/// let hand = [
///     Card::new(Suit::Spades, Rank::Ten),
///     Card::new(Suit::Spades, Rank::Jack),
///     Card::new(Suit::Spades, Rank::Queen),
///     Card::new(Suit::Spades, Rank::King),
///     Card::new(Suit::Spades, Rank::Ace),
/// ];
/// assert_eq!(evaluate(&hand), HandRank::RoyalFlush);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card; HAND_SIZE]) -> HandRank {
    let counts = rank_counts(cards);

    let suit = cards[0].suit;
    let is_flush = cards.iter().all(|card| card.suit == suit);
    let is_straight = is_straight(&counts);

    let max_count = counts.iter().copied().max().unwrap_or(0);
    let pairs = counts.iter().filter(|&&count| count == 2).count();

    if is_straight && is_flush {
        if counts[Rank::Ten.index()..].iter().all(|&count| count == 1) {
            HandRank::RoyalFlush
        } else {
            HandRank::StraightFlush
        }
    } else if max_count == 4 {
        HandRank::FourOfAKind
    } else if max_count == 3 && pairs == 1 {
        HandRank::FullHouse
    } else if is_flush {
        HandRank::Flush
    } else if is_straight {
        HandRank::Straight
    } else if max_count == 3 {
        HandRank::ThreeOfAKind
    } else if pairs == 2 {
        HandRank::TwoPair
    } else if pairs == 1 && high_pair(&counts) {
        HandRank::JacksOrBetter
    } else {
        HandRank::NoWin
    }
}

fn high_pair(counts: &[u8; 13]) -> bool {
    Rank::ALL
        .iter()
        .zip(counts)
        .any(|(&rank, &count)| count == 2 && rank >= Rank::Jack)
}

/// One position of the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSlot {
    card: Card,
    held: bool,
    face_up: bool,
}

impl HandSlot {
    const fn dealt(card: Card) -> Self {
        Self {
            card,
            held: false,
            face_up: true,
        }
    }

    /// Returns the card in this slot.
    #[must_use]
    pub const fn card(&self) -> Card {
        self.card
    }

    /// Returns whether the card is marked to be kept on the draw.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.held
    }

    /// Returns whether the card is showing.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }
}

/// The player's hand.
///
/// Empty between rounds and exactly [`HAND_SIZE`] slots once dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    slots: Vec<HandSlot>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Adds a face-up, unheld card to the hand.
    ///
    /// Returns `false` and leaves the hand untouched if it is already full.
    pub fn deal(&mut self, card: Card) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(HandSlot::dealt(card));
        true
    }

    /// Replaces the card at `index` with a face-up, unheld card.
    ///
    /// Returns the card that was replaced.
    pub fn replace(&mut self, index: usize, card: Card) -> Option<Card> {
        let slot = self.slots.get_mut(index)?;
        let old = slot.card;
        *slot = HandSlot::dealt(card);
        Some(old)
    }

    /// Returns the slots of the hand.
    #[must_use]
    pub fn slots(&self) -> &[HandSlot] {
        &self.slots
    }

    /// Returns the slot at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HandSlot> {
        self.slots.get(index)
    }

    /// Returns the cards in slot order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().map(HandSlot::card)
    }

    /// Returns the five cards as an array, or `None` if the hand is not full.
    #[must_use]
    pub fn to_array(&self) -> Option<[Card; HAND_SIZE]> {
        if !self.is_full() {
            return None;
        }
        let mut cards = [self.slots[0].card; HAND_SIZE];
        for (target, slot) in cards.iter_mut().zip(&self.slots) {
            *target = slot.card;
        }
        Some(cards)
    }

    /// Evaluates the hand, or returns `None` if it is not full.
    #[must_use]
    pub fn rank(&self) -> Option<HandRank> {
        self.to_array().map(|cards| evaluate(&cards))
    }

    /// Flips the held flag at `index` and returns the new value.
    ///
    /// Returns `None`, leaving the hand untouched, if there is no card at
    /// `index` or the card is face down.
    pub fn toggle_hold(&mut self, index: usize) -> Option<bool> {
        let slot = self.slots.get_mut(index)?;
        if !slot.face_up {
            return None;
        }
        slot.held = !slot.held;
        Some(slot.held)
    }

    /// Turns the card at `index` face up or face down.
    ///
    /// Turning a card face down also releases it. Returns `false` if the
    /// index is out of range.
    pub fn set_face_up(&mut self, index: usize, face_up: bool) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        slot.face_up = face_up;
        if !face_up {
            slot.held = false;
        }
        true
    }

    /// Turns every card face up.
    pub fn reveal_all(&mut self) {
        for slot in &mut self.slots {
            slot.face_up = true;
        }
    }

    /// Clears every held flag.
    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.held = false;
        }
    }

    /// Returns the cards currently marked as held.
    #[must_use]
    pub fn held_cards(&self) -> Vec<Card> {
        self.slots
            .iter()
            .filter(|slot| slot.held)
            .map(HandSlot::card)
            .collect()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns whether the hand holds [`HAND_SIZE`] cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() == HAND_SIZE
    }

    /// Empties the hand.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, slot) in self.slots.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", slot.card)?;
        }
        f.write_str("]")
    }
}
