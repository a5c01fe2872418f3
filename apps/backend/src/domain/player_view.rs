//! Per-player masked view of a room's game state.
//!
//! The full `hands` map never leaves the server: each viewer receives only
//! their own hand. Views are derived from the committed snapshot after every
//! transition and never cached.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{legal_bids, Bid};
use crate::domain::game_config::GameConfig;
use crate::domain::state::{
    GameState, Phase, Player, PlayerId, Seat, TeamIndex, TeamScore, Trick, TrickCard,
};
use crate::domain::tricks::playable_cards;
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicGameState {
    pub id: String,
    pub phase: Phase,
    pub config: GameConfig,
    pub players: Vec<Player>,
    pub bids: BTreeMap<PlayerId, Option<Bid>>,
    pub current_trick: Vec<TrickCard>,
    pub completed_tricks: Vec<Trick>,
    pub team_scores: Vec<TeamScore>,
    pub current_player_index: Seat,
    pub spades_broken: bool,
    pub round: u8,
    pub dealer_index: Seat,
    pub winner: Option<TeamIndex>,
    /// Every team tied for the lead.
    pub leading_teams: Vec<TeamIndex>,
    pub my_player_id: PlayerId,
    pub my_hand: Vec<Card>,
    /// Card ids the viewer may play right now; empty when it is not their turn.
    pub playable_card_ids: Vec<String>,
    /// Bids the viewer may place right now; empty when it is not their turn.
    pub legal_bids: Vec<Bid>,
}

/// Project `state` for `player_id`. An unseated viewer gets an empty hand.
pub fn public_view(state: &GameState, player_id: &str) -> PublicGameState {
    let my_turn = state.phase == Phase::Playing && state.is_players_turn(player_id);
    let playable_card_ids = if my_turn {
        playable_cards(state, player_id)
            .iter()
            .map(Card::id)
            .collect()
    } else {
        Vec::new()
    };

    PublicGameState {
        id: state.id.clone(),
        phase: state.phase,
        config: state.config.clone(),
        players: state.players.clone(),
        bids: state.bids.clone(),
        current_trick: state.current_trick.clone(),
        completed_tricks: state.completed_tricks.clone(),
        team_scores: state.team_scores.clone(),
        current_player_index: state.current_player_index,
        spades_broken: state.spades_broken,
        round: state.round,
        dealer_index: state.dealer_index,
        winner: state.winner,
        leading_teams: state.leading_teams(),
        my_player_id: player_id.to_string(),
        my_hand: state.hand(player_id).to_vec(),
        playable_card_ids,
        legal_bids: legal_bids(state, player_id),
    }
}
