//! Seating: players join in order and keep their seat for the life of the room.

use crate::domain::state::{GameState, Phase, Player, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Seat a new player at the next free seat. Only legal while waiting.
pub fn add_player(
    state: &GameState,
    player_id: PlayerId,
    name: impl Into<String>,
) -> Result<GameState, DomainError> {
    if state.phase != Phase::Waiting {
        return Err(DomainError::conflict(
            ConflictKind::GameAlreadyStarted,
            "Game already in progress",
        ));
    }
    if state.players.len() >= state.config.player_count as usize {
        return Err(DomainError::conflict(ConflictKind::RoomFull, "Room is full"));
    }
    let seat_index = state.players.len();
    let mut next = state.clone();
    next.players.push(Player {
        id: player_id,
        name: name.into(),
        // Provisional; teams are recomputed at game start.
        team_index: seat_index % 2,
        seat_index,
        connected: true,
    });
    Ok(next)
}

/// Flip a seated player's connection flag. The seat is never released.
pub fn set_connected(
    state: &GameState,
    player_id: &str,
    connected: bool,
) -> Result<GameState, DomainError> {
    let seat = state.seat_of(player_id).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
    })?;
    let mut next = state.clone();
    next.players[seat].connected = connected;
    Ok(next)
}
