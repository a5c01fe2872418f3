use tracing::info;
use uuid::Uuid;

use super::{Joined, RoomFlowService};
use crate::domain::game_config::PartialGameConfig;
use crate::domain::seats::{add_player, set_connected};
use crate::domain::state::create_initial_state;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::services::rooms::{ConnId, Membership, Room};
use crate::ws::protocol::ServerMsg;

const MAX_NAME_CHARS: usize = 32;

fn normalize_name(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::validation_other("Player name must not be empty"));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(DomainError::validation_other(format!(
            "Player name must be at most {MAX_NAME_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}

/// Room codes are case-insensitive on input.
fn normalize_room_id(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

impl RoomFlowService {
    /// Open a new room and seat the creator at seat 0.
    pub fn create_room(
        &self,
        conn_id: ConnId,
        player_name: &str,
        config: PartialGameConfig,
    ) -> Result<Joined, AppError> {
        let name = normalize_name(player_name)?;
        let config = config.into_config();
        config.validate()?;

        let player_id = Uuid::new_v4().to_string();
        let (room_id, handle) = self.registry.insert_room(|code| {
            let state = create_initial_state(code, config.clone(), config.player_count as usize);
            let state = add_player(&state, player_id.clone(), name.clone())?;
            Ok(Room::new(state))
        })?;
        // The new room is not reachable by any other connection yet.
        self.detach(conn_id);

        let mut room = handle.lock();
        self.seat_connection(conn_id, &mut room, &room_id, &player_id);
        info!(
            room_id = %room_id,
            player_id = %player_id,
            %conn_id,
            player_count = config.player_count,
            team_mode = ?config.team_mode,
            "room created"
        );
        self.broadcast(&room);
        Ok(Joined { room_id, player_id })
    }

    /// Take the next free seat in a waiting room.
    pub fn join_room(
        &self,
        conn_id: ConnId,
        room_id: &str,
        player_name: &str,
    ) -> Result<Joined, AppError> {
        let name = normalize_name(player_name)?;
        let room_id = normalize_room_id(room_id);
        let handle = self.require_room(&room_id)?;
        let previous = self.registry.membership(conn_id);
        let previous_handle = previous
            .as_ref()
            .filter(|m| m.room_id != room_id)
            .and_then(|m| self.registry.room(&m.room_id));

        // Both rooms are held in code order until the move is complete.
        let (mut room, mut previous_room) = match (&previous, &previous_handle) {
            (Some(m), Some(prev)) if m.room_id < room_id => {
                let prev_guard = prev.lock();
                (handle.lock(), Some(prev_guard))
            }
            (_, Some(prev)) => {
                let guard = handle.lock();
                (guard, Some(prev.lock()))
            }
            _ => (handle.lock(), None),
        };

        let player_id = Uuid::new_v4().to_string();
        room.state = add_player(&room.state, player_id.clone(), name)?;

        if let Some(membership) = &previous {
            if let Some(prev) = previous_room.as_deref_mut() {
                if self.release_seat_in(conn_id, membership, prev) {
                    self.broadcast(prev);
                }
            } else if membership.room_id == room_id {
                self.release_seat_in(conn_id, membership, &mut room);
            }
        }
        self.seat_connection(conn_id, &mut room, &room_id, &player_id);
        info!(
            room_id = %room_id,
            player_id = %player_id,
            %conn_id,
            seat = room.state.player_count() - 1,
            "player joined"
        );
        self.broadcast(&room);
        Ok(Joined { room_id, player_id })
    }

    /// Reattach a connection to an existing seat. Any older connection for
    /// the same seat is dropped from the room.
    pub fn rejoin_room(
        &self,
        conn_id: ConnId,
        room_id: &str,
        player_id: &str,
    ) -> Result<Joined, AppError> {
        let room_id = normalize_room_id(room_id);
        let handle = self.require_room(&room_id)?;
        if handle.lock().state.player(player_id).is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} is not seated in room {room_id}"),
            )
            .into());
        }
        self.detach(conn_id);

        let mut room = handle.lock();
        room.state = set_connected(&room.state, player_id, true)?;
        let stale: Vec<ConnId> = room
            .connections
            .iter()
            .filter(|(_, p)| p.as_str() == player_id)
            .map(|(c, _)| *c)
            .collect();
        for old in stale {
            room.connections.remove(&old);
            self.registry.unbind(old);
        }
        self.seat_connection(conn_id, &mut room, &room_id, player_id);
        info!(
            room_id = %room_id,
            player_id = %player_id,
            %conn_id,
            phase = ?room.state.phase,
            "player rejoined"
        );
        self.broadcast(&room);
        Ok(Joined {
            room_id,
            player_id: player_id.to_string(),
        })
    }

    /// Transport closed: forget the connection and mark its seat disconnected.
    /// The seat itself is kept for a later rejoin.
    pub fn disconnect(&self, conn_id: ConnId) {
        if let Some(membership) = self.registry.unregister_connection(conn_id) {
            self.release_seat(conn_id, &membership);
        }
    }

    /// Leave whatever room the connection currently sits in, keeping its outbox.
    fn detach(&self, conn_id: ConnId) {
        if let Some(membership) = self.registry.unbind(conn_id) {
            self.release_seat(conn_id, &membership);
        }
    }

    fn release_seat(&self, conn_id: ConnId, membership: &Membership) {
        let Some(handle) = self.registry.room(&membership.room_id) else {
            return;
        };
        let mut room = handle.lock();
        if self.release_seat_in(conn_id, membership, &mut room) {
            self.broadcast(&room);
        }
    }

    /// Drop the connection from an already locked room and flag its seat
    /// disconnected when no other connection holds it. Returns whether the
    /// snapshot changed; broadcasting is left to the caller.
    fn release_seat_in(&self, conn_id: ConnId, membership: &Membership, room: &mut Room) -> bool {
        room.connections.remove(&conn_id);
        if room.has_live_connection(&membership.player_id) {
            return false;
        }
        match set_connected(&room.state, &membership.player_id, false) {
            Ok(next) => {
                room.state = next;
                info!(
                    room_id = %membership.room_id,
                    player_id = %membership.player_id,
                    %conn_id,
                    "player disconnected"
                );
                true
            }
            Err(_) => false,
        }
    }

    /// Record the connection in the room and registry, then confirm the seat
    /// to it ahead of any state broadcast.
    fn seat_connection(&self, conn_id: ConnId, room: &mut Room, room_id: &str, player_id: &str) {
        room.connections.insert(conn_id, player_id.to_string());
        self.registry.bind(
            conn_id,
            Membership {
                room_id: room_id.to_string(),
                player_id: player_id.to_string(),
            },
        );
        self.registry.send(
            conn_id,
            ServerMsg::JoinedRoom {
                room_id: room_id.to_string(),
                player_id: player_id.to_string(),
            },
        );
    }
}
