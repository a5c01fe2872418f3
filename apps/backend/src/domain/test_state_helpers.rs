//! Test-only game state builders for domain unit tests.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::bidding::{place_bid, Bid};
use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::game_config::{GameConfig, TeamMode};
use crate::domain::round_lifecycle::start_game_with;
use crate::domain::seats::add_player;
use crate::domain::state::{create_initial_state, GameState, Phase};
use crate::domain::teams::{assign_teams, make_team_scores, team_count};
use crate::domain::Card;

pub fn config(player_count: u8, team_mode: TeamMode) -> GameConfig {
    GameConfig {
        player_count,
        team_mode,
        ..GameConfig::default()
    }
}

/// Waiting room with `n` players `p0..pN` seated.
pub fn seated(config: GameConfig, n: usize) -> GameState {
    let mut state = create_initial_state("TEST", config, n);
    for i in 0..n {
        state = add_player(&state, format!("p{i}"), format!("Player {i}")).unwrap();
    }
    state
}

/// Game started and round 1 dealt from a seeded deck.
pub fn started(config: GameConfig, n: usize, seed: u64) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    start_game_with(&seated(config, n), &mut rng).unwrap()
}

pub fn pid(seat: usize) -> String {
    format!("p{seat}")
}

/// Everyone bids in turn order; `bid_for(seat)` picks each seat's bid.
pub fn bid_all(state: &GameState, bid_for: impl Fn(usize) -> Bid) -> GameState {
    let mut state = state.clone();
    while state.phase == Phase::Bidding {
        let seat = state.current_player_index;
        state = place_bid(&state, &pid(seat), bid_for(seat)).unwrap();
    }
    state
}

/// A `playing` state with fixed hands, led from `leader`, for `round` = hand size.
///
/// Hands are indexed by seat; bids default to numeric 0.
pub fn playing_with_hands(config: GameConfig, hands: Vec<Vec<Card>>, leader: usize) -> GameState {
    let n = hands.len();
    let mut state = seated(config.clone(), n);
    state.players = assign_teams(&state.players, config.team_mode, n, config.num_teams);
    state.team_scores = make_team_scores(team_count(config.team_mode, n, config.num_teams));
    state.round = hands.iter().map(Vec::len).max().unwrap_or(1).max(1) as u8;
    state.hands = BTreeMap::new();
    state.bids = BTreeMap::new();
    for (seat, hand) in hands.into_iter().enumerate() {
        state.hands.insert(pid(seat), hand);
        state.bids.insert(pid(seat), Some(Bid::Numeric(0)));
    }
    state.phase = Phase::Playing;
    state.current_player_index = leader;
    state
}

pub fn cards(ids: &[&str]) -> Vec<Card> {
    try_parse_cards(ids).unwrap()
}
