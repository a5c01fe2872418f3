//! Game start and round-to-round progression.

use rand::Rng;

use crate::domain::dealing::deal_cards_with;
use crate::domain::rules::{MIN_PLAYERS, TOTAL_ROUNDS};
use crate::domain::state::{next_seat, require_phase, GameState, Phase};
use crate::domain::teams::{assign_teams, make_team_scores, team_count};
use crate::errors::domain::{DomainError, ValidationKind};

pub fn start_game(state: &GameState) -> Result<GameState, DomainError> {
    start_game_with(state, &mut rand::rng())
}

/// Leave the lobby: fix teams from seat order, size the score table for the
/// seated players and deal round 1.
pub fn start_game_with<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> Result<GameState, DomainError> {
    require_phase(state, Phase::Waiting, "start_game")?;
    let seated = state.player_count();
    if seated < MIN_PLAYERS as usize {
        return Err(DomainError::validation(
            ValidationKind::NotEnoughPlayers,
            format!("At least {MIN_PLAYERS} players are needed to start"),
        ));
    }
    let mode = state.config.team_mode;
    let teams = team_count(mode, seated, state.config.num_teams);
    if teams > seated {
        return Err(DomainError::validation(
            ValidationKind::NotEnoughPlayers,
            format!("{teams} teams need at least {teams} players, {seated} seated"),
        ));
    }

    let mut next = state.clone();
    next.players = assign_teams(&state.players, mode, seated, state.config.num_teams);
    next.team_scores = make_team_scores(teams);
    next.round = 1;
    deal_cards_with(&next, rng)
}

pub fn start_next_round(state: &GameState) -> Result<GameState, DomainError> {
    start_next_round_with(state, &mut rand::rng())
}

/// Advance to the next round: rotate the dealer one seat and deal immediately.
///
/// Returns the state unchanged once the last round has been played.
pub fn start_next_round_with<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> Result<GameState, DomainError> {
    if state.round >= TOTAL_ROUNDS {
        return Ok(state.clone());
    }
    if state.players.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NotEnoughPlayers,
            "No seated players",
        ));
    }
    let mut next = state.clone();
    next.round += 1;
    next.dealer_index = next_seat(state.dealer_index, state.player_count());
    next.hands.clear();
    next.bids.clear();
    next.current_trick.clear();
    next.completed_tricks.clear();
    next.spades_broken = false;
    next.winner = None;
    next.phase = Phase::Bidding;
    deal_cards_with(&next, rng)
}
