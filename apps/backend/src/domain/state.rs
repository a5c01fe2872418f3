use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::bidding::Bid;
use crate::domain::game_config::GameConfig;
use crate::domain::teams::{make_team_scores, team_count};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Opaque player id, generated at join time.
pub type PlayerId = String;
/// Seat position, assigned in join order.
pub type Seat = usize;
pub type TeamIndex = usize;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Room created, players joining.
    Waiting,
    /// Players bid in seat order starting left of the dealer.
    Bidding,
    /// Tricks being played.
    Playing,
    /// Round scored; waiting for the next deal.
    Scoring,
    /// Round 13 scored.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team_index: TeamIndex,
    pub seat_index: Seat,
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickCard {
    pub player_id: PlayerId,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub cards: Vec<TrickCard>,
    pub winner_id: PlayerId,
    pub lead_suit: Suit,
}

/// One entry per team (one per player in individual mode).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub score: i32,
    /// Overtricks not yet converted into a penalty (always < 3 after scoring).
    pub bags: u32,
    /// Combined numeric bid for the last scored round.
    pub bids: u32,
    /// Tricks taken in the last scored round.
    pub tricks: u32,
    /// Append-only per-round deltas; index = round - 1.
    pub round_scores: Vec<i32>,
}

/// Room-scoped aggregate. Transitions take `&GameState` and return a new snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub id: String,
    pub phase: Phase,
    pub config: GameConfig,
    /// Seated players in seat order.
    pub players: Vec<Player>,
    /// Never leaves the server except as the owner's `my_hand`.
    pub hands: BTreeMap<PlayerId, Vec<Card>>,
    pub bids: BTreeMap<PlayerId, Option<Bid>>,
    pub current_trick: Vec<TrickCard>,
    pub completed_tricks: Vec<Trick>,
    pub team_scores: Vec<TeamScore>,
    pub current_player_index: Seat,
    pub spades_broken: bool,
    /// 1..=13; round N deals N cards each.
    pub round: u8,
    pub dealer_index: Seat,
    pub winner: Option<TeamIndex>,
}

/// Fresh `waiting`-phase state for a new room.
pub fn create_initial_state(id: impl Into<String>, config: GameConfig, player_count: usize) -> GameState {
    let teams = team_count(config.team_mode, player_count, config.num_teams);
    GameState {
        id: id.into(),
        phase: Phase::Waiting,
        config,
        players: Vec::new(),
        hands: BTreeMap::new(),
        bids: BTreeMap::new(),
        current_trick: Vec::new(),
        completed_tricks: Vec::new(),
        team_scores: make_team_scores(teams),
        current_player_index: 0,
        spades_broken: false,
        round: 1,
        dealer_index: 0,
        winner: None,
    }
}

impl GameState {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn seat_of(&self, player_id: &str) -> Option<Seat> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn is_players_turn(&self, player_id: &str) -> bool {
        self.seat_of(player_id) == Some(self.current_player_index)
    }

    pub fn hand(&self, player_id: &str) -> &[Card] {
        self.hands.get(player_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.current_trick.first().map(|tc| tc.card.suit)
    }

    pub fn bid_of(&self, player_id: &str) -> Option<Bid> {
        self.bids.get(player_id).copied().flatten()
    }

    /// Tricks taken this round by one player.
    pub fn tricks_won(&self, player_id: &str) -> u32 {
        self.completed_tricks
            .iter()
            .filter(|t| t.winner_id == player_id)
            .count() as u32
    }

    /// Every team tied for the highest cumulative score.
    pub fn leading_teams(&self) -> Vec<TeamIndex> {
        let Some(best) = self.team_scores.iter().map(|t| t.score).max() else {
            return Vec::new();
        };
        self.team_scores
            .iter()
            .enumerate()
            .filter(|(_, t)| t.score == best)
            .map(|(i, _)| i)
            .collect()
    }

    /// All cards currently dealt out this round: hands, the open trick and finished tricks.
    pub fn cards_in_play(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.hands.values().flatten().copied().collect();
        cards.extend(self.current_trick.iter().map(|tc| tc.card));
        cards.extend(
            self.completed_tricks
                .iter()
                .flat_map(|t| t.cards.iter().map(|tc| tc.card)),
        );
        cards
    }
}

/// Seat / turn math helpers for an `n`-seat table.
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: isize, n: usize) -> Seat {
    debug_assert!(n > 0, "seat math needs at least one seat");
    (seat as isize + delta).rem_euclid(n as isize) as Seat
}

/// Returns the next seat clockwise.
#[inline]
pub fn next_seat(seat: Seat, n: usize) -> Seat {
    seat_offset(seat, 1, n)
}

/// Round-start seat (player to the left of the dealer): deals first, bids first, leads first.
#[inline]
pub fn round_start_seat(dealer: Seat, n: usize) -> Seat {
    next_seat(dealer, n)
}

pub fn require_phase(state: &GameState, expected: Phase, ctx: &'static str) -> Result<(), DomainError> {
    if state.phase != expected {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("{ctx}: expected phase {expected:?}, game is in {:?}", state.phase),
        ));
    }
    Ok(())
}

pub fn require_turn(state: &GameState, player_id: &str) -> Result<Seat, DomainError> {
    let seat = state.seat_of(player_id).ok_or_else(|| {
        DomainError::validation(ValidationKind::NotSeated, "Player is not seated in this game")
    })?;
    if seat != state.current_player_index {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }
    Ok(seat)
}
