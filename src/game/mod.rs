//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{Evaluation, SessionStats};
use crate::sink::{EventSink, LogSink};

mod bet;
mod draw;
mod payout;
pub mod state;

pub use state::GameState;

/// A Jacks or Better video poker engine for a single session.
///
/// The game owns the deck, the hand, and the credit balance, and moves
/// through [`GameState::Betting`], [`GameState::Holding`], and
/// [`GameState::Evaluating`] for every hand. Rejected calls return an error,
/// report a warning to the sink, and leave the game unchanged.
///
/// Diagnostics go to the sink `S`, which defaults to [`LogSink`].
pub struct Game<S = LogSink> {
    /// Cards left to draw. The top of the deck is the last element.
    pub deck: Vec<Card>,
    /// The player's hand.
    pub hand: Hand,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The hand as it was dealt, before any draw.
    initial_hand: Vec<Card>,
    /// Credit balance.
    credits: usize,
    /// Balance when the session started.
    starting_credits: usize,
    /// Highest balance seen.
    max_credits: usize,
    /// Lowest balance seen.
    min_credits: usize,
    /// Bet for the current hand (0 when none).
    current_bet: usize,
    /// Bet restored after every settled hand (0 when disabled).
    auto_bet: usize,
    /// Result of the last evaluation, kept until the hand is settled.
    last_evaluation: Option<Evaluation>,
    /// Tallies over the session.
    stats: SessionStats,
    /// Random number generator.
    rng: ChaCha8Rng,
    /// Where diagnostics are reported.
    sink: S,
}

impl Game {
    /// Creates a new game with the given seed, reporting through the `log` crate.
    ///
    /// # Example
    ///
    /// ```
    /// use jacks::{DECK_SIZE, Game, GameOptions, GameState};
    ///
    /// let options = GameOptions::default().with_starting_credits(50);
    /// let game = Game::new(options, 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.credits(), 50);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_sink(options, seed, LogSink)
    }
}

impl<S: EventSink> Game<S> {
    /// Creates a new game with the given seed, reporting through `sink`.
    pub fn with_sink(options: GameOptions, seed: u64, sink: S) -> Self {
        let credits = options.starting_credits;
        let auto_bet = options.auto_bet;

        let mut game = Self {
            deck: Vec::with_capacity(DECK_SIZE),
            hand: Hand::new(),
            options,
            state: GameState::Betting,
            initial_hand: Vec::new(),
            credits,
            starting_credits: credits,
            max_credits: credits,
            min_credits: credits,
            current_bet: 0,
            auto_bet: 0,
            last_evaluation: None,
            stats: SessionStats::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            sink,
        };

        game.sink
            .info(format_args!("Game initialized with {credits} credits"));
        game.initialize_deck();

        if auto_bet > 0 {
            // A rejected auto bet is reported by the sink and leaves it disabled.
            let _ = game.set_auto_bet(auto_bet);
        }

        game
    }

    /// Creates and shuffles a full 52-card deck.
    fn create_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Replaces the deck with a fresh shuffled one.
    fn initialize_deck(&mut self) {
        self.deck = Self::create_deck(&mut self.rng);
        self.sink
            .debug(format_args!("New deck initialized and shuffled"));
    }

    /// Shuffles the cards that are not in the hand.
    fn shuffle_remaining_cards(&mut self) {
        self.deck.shuffle(&mut self.rng);
        let remaining = self.deck.len();
        self.sink
            .debug(format_args!("Shuffled remaining {remaining} cards"));
    }

    /// Draws a card from the top of the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.pop()
    }

    /// Turns every card in the hand face up.
    pub fn reveal_cards(&mut self) {
        self.hand.reveal_all();
        self.sink.info(format_args!("Cards revealed"));
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current credit balance.
    #[must_use]
    pub const fn credits(&self) -> usize {
        self.credits
    }

    /// Returns the credit balance the session started with.
    #[must_use]
    pub const fn starting_credits(&self) -> usize {
        self.starting_credits
    }

    /// Returns the bet for the current hand, or 0 if none has been placed.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the bet restored after every settled hand, or 0 if disabled.
    #[must_use]
    pub const fn auto_bet(&self) -> usize {
        self.auto_bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the five cards as they were dealt, before the draw.
    ///
    /// Empty until a hand is dealt, and again once it is settled.
    #[must_use]
    pub fn initial_hand(&self) -> &[Card] {
        &self.initial_hand
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the hand has been evaluated and the result can be shown.
    #[must_use]
    pub const fn result_ready(&self) -> bool {
        self.last_evaluation.is_some()
    }

    /// Returns the evaluation of the current hand, if it has been evaluated.
    #[must_use]
    pub const fn last_evaluation(&self) -> Option<Evaluation> {
        self.last_evaluation
    }

    /// Returns the tallies over every settled hand.
    #[must_use]
    pub const fn session_stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Returns the sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the sink mutably.
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the game and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
