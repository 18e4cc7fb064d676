//! Pay table and hand evaluation tests.

use jacks::{Card, Evaluation, HAND_SIZE, Hand, HandRank, Rank, Suit, evaluate};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand(cards: [(Suit, Rank); HAND_SIZE]) -> [Card; HAND_SIZE] {
    cards.map(|(suit, rank)| card(suit, rank))
}

use Rank::{Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two};
use Suit::{Clubs, Diamonds, Hearts, Spades};

#[test]
fn royal_flush() {
    let cards = hand([
        (Spades, Ten),
        (Spades, Jack),
        (Spades, Queen),
        (Spades, King),
        (Spades, Ace),
    ]);
    assert_eq!(evaluate(&cards), HandRank::RoyalFlush);
    assert_eq!(Evaluation::new(HandRank::RoyalFlush, 3).payout, 2400);
}

#[test]
fn royal_flush_in_any_order() {
    let cards = hand([
        (Hearts, King),
        (Hearts, Ace),
        (Hearts, Ten),
        (Hearts, Queen),
        (Hearts, Jack),
    ]);
    assert_eq!(evaluate(&cards), HandRank::RoyalFlush);
}

#[test]
fn straight_flush() {
    let cards = hand([
        (Clubs, Five),
        (Clubs, Six),
        (Clubs, Seven),
        (Clubs, Eight),
        (Clubs, Nine),
    ]);
    assert_eq!(evaluate(&cards), HandRank::StraightFlush);
}

#[test]
fn wheel_flush_is_a_straight_flush() {
    let cards = hand([
        (Diamonds, Ace),
        (Diamonds, Two),
        (Diamonds, Three),
        (Diamonds, Four),
        (Diamonds, Five),
    ]);
    assert_eq!(evaluate(&cards), HandRank::StraightFlush);
}

#[test]
fn four_of_a_kind() {
    let cards = hand([
        (Spades, Nine),
        (Hearts, Nine),
        (Diamonds, Nine),
        (Clubs, Nine),
        (Spades, Two),
    ]);
    assert_eq!(evaluate(&cards), HandRank::FourOfAKind);
}

#[test]
fn full_house() {
    let cards = hand([
        (Hearts, Two),
        (Diamonds, Two),
        (Clubs, Two),
        (Spades, Five),
        (Hearts, Five),
    ]);
    assert_eq!(evaluate(&cards), HandRank::FullHouse);
}

#[test]
fn flush() {
    let cards = hand([
        (Hearts, Two),
        (Hearts, Seven),
        (Hearts, Nine),
        (Hearts, Jack),
        (Hearts, King),
    ]);
    assert_eq!(evaluate(&cards), HandRank::Flush);
}

#[test]
fn straight_with_mixed_suits() {
    let cards = hand([
        (Spades, Three),
        (Hearts, Four),
        (Diamonds, Five),
        (Clubs, Six),
        (Spades, Seven),
    ]);
    assert_eq!(evaluate(&cards), HandRank::Straight);
}

#[test]
fn ace_plays_low_and_high_in_straights() {
    let wheel = hand([
        (Spades, Ace),
        (Hearts, Two),
        (Diamonds, Three),
        (Clubs, Four),
        (Spades, Five),
    ]);
    assert_eq!(evaluate(&wheel), HandRank::Straight);

    let broadway = hand([
        (Spades, Ten),
        (Hearts, Jack),
        (Diamonds, Queen),
        (Clubs, King),
        (Spades, Ace),
    ]);
    assert_eq!(evaluate(&broadway), HandRank::Straight);
}

#[test]
fn straights_do_not_wrap_around() {
    let cards = hand([
        (Spades, King),
        (Hearts, Ace),
        (Diamonds, Two),
        (Clubs, Three),
        (Spades, Four),
    ]);
    assert_eq!(evaluate(&cards), HandRank::NoWin);
}

#[test]
fn three_of_a_kind() {
    let cards = hand([
        (Spades, Seven),
        (Hearts, Seven),
        (Diamonds, Seven),
        (Clubs, Two),
        (Spades, King),
    ]);
    assert_eq!(evaluate(&cards), HandRank::ThreeOfAKind);
}

#[test]
fn two_pair() {
    let cards = hand([
        (Spades, Two),
        (Hearts, Two),
        (Diamonds, Nine),
        (Clubs, Nine),
        (Spades, King),
    ]);
    assert_eq!(evaluate(&cards), HandRank::TwoPair);
}

#[test]
fn pairs_of_jacks_or_better_pay() {
    for rank in [Jack, Queen, King, Ace] {
        let cards = hand([
            (Spades, rank),
            (Hearts, rank),
            (Diamonds, Two),
            (Clubs, Five),
            (Spades, Eight),
        ]);
        assert_eq!(evaluate(&cards), HandRank::JacksOrBetter, "pair of {rank}");
    }
}

#[test]
fn low_pairs_do_not_pay() {
    for rank in [Two, Four, Nine, Ten] {
        let cards = hand([
            (Spades, rank),
            (Hearts, rank),
            (Diamonds, Seven),
            (Clubs, Queen),
            (Spades, King),
        ]);
        assert_eq!(evaluate(&cards), HandRank::NoWin, "pair of {rank}");
    }
}

#[test]
fn high_card_does_not_pay() {
    let cards = hand([
        (Spades, Two),
        (Hearts, Five),
        (Diamonds, Nine),
        (Clubs, Jack),
        (Spades, Ace),
    ]);
    assert_eq!(evaluate(&cards), HandRank::NoWin);
}

#[test]
fn pay_table_multipliers_and_labels() {
    let expected = [
        (HandRank::NoWin, 0, "No Win"),
        (HandRank::JacksOrBetter, 1, "Jacks or Better"),
        (HandRank::TwoPair, 2, "Two Pair"),
        (HandRank::ThreeOfAKind, 3, "Three of a Kind"),
        (HandRank::Straight, 4, "Straight"),
        (HandRank::Flush, 6, "Flush"),
        (HandRank::FullHouse, 9, "Full House"),
        (HandRank::FourOfAKind, 25, "Four of a Kind"),
        (HandRank::StraightFlush, 50, "Straight Flush"),
        (HandRank::RoyalFlush, 800, "Royal Flush"),
    ];

    for ((rank, multiplier, label), listed) in expected.into_iter().zip(HandRank::ALL) {
        assert_eq!(rank, listed);
        assert_eq!(rank.multiplier(), multiplier);
        assert_eq!(rank.label(), label);
        assert_eq!(rank.to_string(), label);
        assert_eq!(rank.payout(5), multiplier * 5);
    }

    assert!(HandRank::ALL.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn hand_rank_requires_five_cards() {
    let mut partial = Hand::new();
    partial.deal(card(Spades, Ace));
    partial.deal(card(Hearts, Ace));
    assert_eq!(partial.rank(), None);
    assert_eq!(partial.to_array(), None);

    for extra in [card(Clubs, Two), card(Clubs, Three), card(Clubs, Four)] {
        assert!(partial.deal(extra));
    }
    assert!(!partial.deal(card(Clubs, Five)));
    assert_eq!(partial.rank(), Some(HandRank::JacksOrBetter));
}

#[test]
fn cards_display_as_rank_and_suit() {
    assert_eq!(card(Spades, Ten).to_string(), "10♠");
    assert_eq!(card(Hearts, Queen).to_string(), "Q♥");
    assert_eq!(card(Diamonds, Two).to_string(), "2♦");
    assert_eq!(card(Clubs, Ace).to_string(), "A♣");

    let mut dealt = Hand::new();
    dealt.deal(card(Spades, Ten));
    dealt.deal(card(Spades, Jack));
    assert_eq!(dealt.to_string(), "[10♠, J♠]");
}

#[test]
fn rank_order_puts_jack_above_ten() {
    assert!(Jack > Ten);
    assert!(Ace > King);
    assert_eq!(Two.index(), 0);
    assert_eq!(Jack.index(), 9);
    assert_eq!(Ace.index(), 12);
    assert_eq!(Rank::ALL.len(), 13);
}
