//! Hand category evaluation tests.

use holdem_deal::{
    Card, EvalError, HandRank, Rank, Suit, TableOptions, evaluate_hand, evaluate_hand_with,
    is_flush, is_straight, is_straight_with, rank_counts,
};

use holdem_deal::Rank::{
    Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two,
};
use holdem_deal::Suit::{Clubs, Diamonds, Hearts, Spades};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn wheel_rules() -> TableOptions {
    TableOptions::default().with_wheel_straights(true)
}

#[test]
fn rank_counts_group_by_rank() {
    let cards = [
        card(Clubs, Nine),
        card(Hearts, Nine),
        card(Spades, Nine),
        card(Diamonds, Two),
        card(Clubs, Two),
        card(Hearts, Ace),
    ];
    let counts = rank_counts(&cards);

    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&Nine], 3);
    assert_eq!(counts[&Two], 2);
    assert_eq!(counts[&Ace], 1);
    assert!(!counts.contains_key(&King));
}

#[test]
fn flush_needs_five_of_a_suit() {
    let flush = [
        card(Hearts, Two),
        card(Hearts, Five),
        card(Hearts, Eight),
        card(Hearts, Jack),
        card(Hearts, King),
        card(Clubs, Three),
        card(Diamonds, Nine),
    ];
    assert!(is_flush(&flush));

    let four_hearts = [
        card(Hearts, Two),
        card(Hearts, Five),
        card(Hearts, Eight),
        card(Hearts, Jack),
        card(Clubs, King),
        card(Clubs, Three),
        card(Clubs, Nine),
    ];
    assert!(!is_flush(&four_hearts));
}

#[test]
fn straight_needs_five_consecutive_values() {
    let run = [
        card(Clubs, Five),
        card(Diamonds, Six),
        card(Hearts, Seven),
        card(Spades, Eight),
        card(Clubs, Nine),
    ];
    assert!(is_straight(&run));

    let gapped = [
        card(Clubs, Two),
        card(Diamonds, Two),
        card(Hearts, Three),
        card(Spades, Four),
        card(Clubs, Five),
        card(Diamonds, Seven),
    ];
    assert!(!is_straight(&gapped));

    let broadway = [
        card(Clubs, Ten),
        card(Diamonds, Jack),
        card(Hearts, Queen),
        card(Spades, King),
        card(Clubs, Ace),
        card(Clubs, Two),
        card(Hearts, Two),
    ];
    assert!(is_straight(&broadway));
}

#[test]
fn straight_survives_duplicate_ranks_inside_the_run() {
    let cards = [
        card(Clubs, Four),
        card(Diamonds, Five),
        card(Hearts, Five),
        card(Spades, Six),
        card(Clubs, Seven),
        card(Diamonds, Seven),
        card(Hearts, Eight),
    ];
    assert!(is_straight(&cards));
}

#[test]
fn wheel_is_only_a_straight_when_enabled() {
    let wheel = [
        card(Hearts, Ace),
        card(Clubs, Two),
        card(Diamonds, Three),
        card(Spades, Four),
        card(Hearts, Five),
        card(Clubs, Nine),
        card(Diamonds, Jack),
    ];
    assert!(!is_straight(&wheel));
    assert!(is_straight_with(&wheel, true));

    assert_eq!(evaluate_hand(&wheel).unwrap(), HandRank::HighCard);
    assert_eq!(
        evaluate_hand_with(&wheel, &wheel_rules()).unwrap(),
        HandRank::Straight
    );
}

#[test]
fn wheel_straight_flush_when_enabled() {
    let cards = [
        card(Hearts, Ace),
        card(Hearts, Two),
        card(Hearts, Three),
        card(Hearts, Four),
        card(Hearts, Five),
        card(Clubs, Nine),
        card(Diamonds, Jack),
    ];

    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::Flush);
    assert_eq!(
        evaluate_hand_with(&cards, &wheel_rules()).unwrap(),
        HandRank::StraightFlush
    );
}

#[test]
fn royal_flush() {
    let cards = [
        card(Hearts, Ten),
        card(Hearts, Jack),
        card(Hearts, Queen),
        card(Hearts, King),
        card(Hearts, Ace),
        card(Clubs, Two),
        card(Spades, Seven),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::RoyalFlush);
}

// The royal ranks only need to be present, not suited with the flush.
#[test]
fn royalty_counts_ranks_in_any_suit() {
    let cards = [
        card(Hearts, Nine),
        card(Hearts, Ten),
        card(Hearts, Jack),
        card(Hearts, Queen),
        card(Hearts, King),
        card(Clubs, Ace),
        card(Diamonds, Two),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::RoyalFlush);
}

#[test]
fn straight_flush() {
    let cards = [
        card(Spades, Five),
        card(Spades, Six),
        card(Spades, Seven),
        card(Spades, Eight),
        card(Spades, Nine),
        card(Clubs, Two),
        card(Hearts, King),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::StraightFlush);
}

#[test]
fn four_of_a_kind_beats_the_two_rank_full_house() {
    let cards = [
        card(Clubs, Nine),
        card(Diamonds, Nine),
        card(Hearts, Nine),
        card(Spades, Nine),
        card(Clubs, King),
        card(Diamonds, King),
        card(Hearts, King),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::FourOfAKind);
}

#[test]
fn two_sets_of_trips_are_three_of_a_kind() {
    let cards = [
        card(Clubs, Queen),
        card(Diamonds, Queen),
        card(Hearts, Queen),
        card(Clubs, Five),
        card(Diamonds, Five),
        card(Hearts, Five),
        card(Spades, Nine),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::ThreeOfAKind);
}

#[test]
fn trips_in_the_middle_rank_are_found() {
    let cards = [
        card(Clubs, Two),
        card(Diamonds, Two),
        card(Clubs, Eight),
        card(Diamonds, Eight),
        card(Hearts, Eight),
        card(Clubs, Ace),
        card(Diamonds, Ace),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::ThreeOfAKind);
}

#[test]
fn three_ranks_without_trips_are_two_pair() {
    let cards = [
        card(Clubs, Nine),
        card(Diamonds, Nine),
        card(Hearts, Nine),
        card(Spades, Nine),
        card(Clubs, King),
        card(Diamonds, King),
        card(Hearts, Three),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::TwoPair);
}

#[test]
fn four_ranks_are_one_pair() {
    let cards = [
        card(Clubs, Two),
        card(Diamonds, Two),
        card(Clubs, Five),
        card(Diamonds, Five),
        card(Hearts, Nine),
        card(Spades, Nine),
        card(Hearts, King),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::OnePair);
}

#[test]
fn flush_without_straight() {
    let cards = [
        card(Hearts, Two),
        card(Hearts, Five),
        card(Hearts, Eight),
        card(Hearts, Jack),
        card(Hearts, King),
        card(Clubs, Three),
        card(Diamonds, Nine),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::Flush);
}

#[test]
fn straight_without_flush() {
    let cards = [
        card(Clubs, Five),
        card(Diamonds, Six),
        card(Hearts, Seven),
        card(Spades, Eight),
        card(Clubs, Nine),
        card(Diamonds, Queen),
        card(Hearts, Two),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::Straight);
}

#[test]
fn high_card() {
    let cards = [
        card(Clubs, Two),
        card(Diamonds, Four),
        card(Hearts, Six),
        card(Spades, Eight),
        card(Clubs, Ten),
        card(Diamonds, Queen),
        card(Hearts, Ace),
    ];
    assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::HighCard);
}

#[test]
fn card_order_does_not_change_the_category() {
    let mut cards = vec![
        card(Spades, Nine),
        card(Hearts, Five),
        card(Clubs, Queen),
        card(Diamonds, Five),
        card(Hearts, Queen),
        card(Clubs, Five),
        card(Diamonds, Queen),
    ];
    let unsorted = evaluate_hand(&cards).unwrap();
    cards.sort();
    assert_eq!(evaluate_hand(&cards).unwrap(), unsorted);
    cards.reverse();
    assert_eq!(evaluate_hand(&cards).unwrap(), unsorted);
}

#[test]
fn evaluation_needs_seven_cards() {
    let six = [
        card(Clubs, Two),
        card(Diamonds, Four),
        card(Hearts, Six),
        card(Spades, Eight),
        card(Clubs, Ten),
        card(Diamonds, Queen),
    ];
    assert_eq!(
        evaluate_hand(&six).unwrap_err(),
        EvalError::InvalidCardCount(6)
    );

    let mut eight = six.to_vec();
    eight.push(card(Hearts, Ace));
    eight.push(card(Spades, Ace));
    assert_eq!(
        evaluate_hand(&eight).unwrap_err(),
        EvalError::InvalidCardCount(8)
    );

    assert_eq!(
        evaluate_hand(&[]).unwrap_err(),
        EvalError::InvalidCardCount(0)
    );
    assert_eq!(
        EvalError::InvalidCardCount(6).to_string(),
        "expected 7 cards to evaluate, got 6"
    );
}

#[test]
fn evaluation_rejects_repeated_cards() {
    let cards = [
        card(Clubs, Two),
        card(Diamonds, Four),
        card(Hearts, Six),
        card(Spades, Eight),
        card(Clubs, Ten),
        card(Diamonds, Queen),
        card(Clubs, Two),
    ];
    assert_eq!(
        evaluate_hand(&cards).unwrap_err(),
        EvalError::DuplicateCard(card(Clubs, Two))
    );
}

#[test]
fn categories_are_ordered_by_strength() {
    assert!(HandRank::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(HandRank::HighCard as u8, 0);
    assert_eq!(HandRank::RoyalFlush as u8, 9);
    assert!(HandRank::FullHouse > HandRank::Flush);
    assert!(HandRank::Flush > HandRank::Straight);
}

#[test]
fn category_labels() {
    let labels: Vec<String> = HandRank::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(
        labels,
        [
            "High Card",
            "One Pair",
            "Two Pair",
            "Three of a Kind",
            "Straight",
            "Flush",
            "Full House",
            "Four of a Kind",
            "Straight Flush",
            "Royal Flush",
        ]
    );
}
