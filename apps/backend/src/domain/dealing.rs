//! Deck construction, shuffling and dealing.

use std::collections::BTreeMap;

use rand::Rng;

use crate::domain::rules::{hand_size_for_round, DECK_SIZE, MIN_PLAYERS};
use crate::domain::state::{round_start_seat, seat_offset, GameState, Phase};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// A full 52-card deck, suit-major (spades, hearts, diamonds, clubs), rank-minor.
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Shuffle with the thread-local RNG.
pub fn shuffle_deck(deck: &[Card]) -> Vec<Card> {
    shuffle_deck_with(deck, &mut rand::rng())
}

/// Fisher-Yates from the last index down to 1, each index swapped with a
/// uniformly chosen index in `0..=i`.
pub fn shuffle_deck_with<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut out = deck.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Deal the current round with the thread-local RNG.
pub fn deal_cards(state: &GameState) -> Result<GameState, DomainError> {
    deal_cards_with(state, &mut rand::rng())
}

/// Deal the round's hand size to every seated player from one fresh shuffled deck.
///
/// Each pass visits seats `dealer+1 .. dealer+n`. Bids, tricks and the
/// spades-broken flag reset; the seat left of the dealer bids first.
pub fn deal_cards_with<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> Result<GameState, DomainError> {
    let n = state.player_count();
    if n < MIN_PLAYERS as usize {
        return Err(DomainError::validation(
            ValidationKind::NotEnoughPlayers,
            format!("At least {MIN_PLAYERS} players are needed to deal"),
        ));
    }
    // Rounds outside the schedule deal nothing and are rejected below.
    let per_player = hand_size_for_round(state.round).map_or(0, usize::from);
    let demand = per_player * n;
    if per_player == 0 || demand > DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandSize,
            format!(
                "Cannot deal round {} ({per_player} cards) to {n} players from a {DECK_SIZE}-card deck",
                state.round
            ),
        ));
    }

    let deck = shuffle_deck_with(&create_deck(), rng);
    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(per_player); n];
    let mut cards = deck.into_iter();
    for _ in 0..per_player {
        for offset in 1..=n {
            let seat = seat_offset(state.dealer_index, offset as isize, n);
            if let Some(card) = cards.next() {
                hands[seat].push(card);
            }
        }
    }

    let mut next = state.clone();
    next.hands = BTreeMap::new();
    next.bids = BTreeMap::new();
    for (player, mut hand) in next.players.iter().zip(hands) {
        hand.sort();
        next.hands.insert(player.id.clone(), hand);
        next.bids.insert(player.id.clone(), None);
    }
    next.current_trick.clear();
    next.completed_tricks.clear();
    next.spades_broken = false;
    next.winner = None;
    next.phase = Phase::Bidding;
    next.current_player_index = round_start_seat(state.dealer_index, n);
    Ok(next)
}
