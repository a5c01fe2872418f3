// Proptest generators for domain types.
// Cards come from one deck, so generated hands never share a card.

use proptest::prelude::*;

use crate::domain::bidding::Bid;
use crate::domain::game_config::TeamMode;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card::new(rank, suit))
}

/// `count` distinct cards, drawn from a shuffled deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards: Vec<Card> = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Supported table sizes.
pub fn player_count() -> impl Strategy<Value = usize> {
    2usize..=4
}

pub fn team_mode() -> impl Strategy<Value = TeamMode> {
    prop_oneof![
        Just(TeamMode::Individual),
        Just(TeamMode::TwoTeams),
        Just(TeamMode::ThreeTeams),
    ]
}

/// A complete trick of `n` distinct cards; returns the plays in order.
pub fn complete_trick(n: usize) -> impl Strategy<Value = Vec<Card>> {
    unique_cards(n)
}

/// 2..=4 player trick.
pub fn any_trick() -> impl Strategy<Value = Vec<Card>> {
    player_count().prop_flat_map(complete_trick)
}

/// Any bid shape, including ones outside the legal range.
pub fn bid() -> impl Strategy<Value = Bid> {
    prop_oneof![
        4 => (0u8..=15).prop_map(Bid::Numeric),
        1 => Just(Bid::Nil),
        1 => Just(Bid::BlindNil),
    ]
}

/// RNG seed for seeded deals.
pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
