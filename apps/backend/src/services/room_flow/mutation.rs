use tracing::{debug, info, warn};

use crate::domain::player_view::public_view;
use crate::domain::state::GameState;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::services::room_flow::RoomFlowService;
use crate::services::rooms::{ConnId, Membership, Room, RoomHandle};
use crate::ws::protocol::ServerMsg;

impl RoomFlowService {
    /// Seat of the connection, or a `NotSeated` rejection.
    pub(super) fn require_membership(&self, conn_id: ConnId) -> Result<Membership, AppError> {
        self.registry.membership(conn_id).ok_or_else(|| {
            DomainError::validation(ValidationKind::NotSeated, "Join a room first").into()
        })
    }

    pub(super) fn require_room(&self, room_id: &str) -> Result<RoomHandle, AppError> {
        self.registry.room(room_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Room, format!("Room {room_id} not found")).into()
        })
    }

    /// Apply an engine transition on behalf of the connection's seat.
    ///
    /// The transition sees the committed snapshot; on `Err` nothing is stored
    /// or broadcast. On success the new snapshot is committed and fanned out
    /// before the room lock is released.
    pub(super) fn run_mutation<F>(
        &self,
        conn_id: ConnId,
        action: &'static str,
        mutation: F,
    ) -> Result<(), AppError>
    where
        F: FnOnce(&GameState, &str) -> Result<GameState, DomainError>,
    {
        let membership = self.require_membership(conn_id)?;
        let handle = self.require_room(&membership.room_id)?;
        let mut room = handle.lock();

        let next = match mutation(&room.state, &membership.player_id) {
            Ok(next) => next,
            Err(err) => {
                warn!(
                    room_id = %membership.room_id,
                    player_id = %membership.player_id,
                    %conn_id,
                    action,
                    error = %err,
                    "command rejected"
                );
                return Err(err.into());
            }
        };

        info!(
            room_id = %membership.room_id,
            player_id = %membership.player_id,
            action,
            phase = ?next.phase,
            round = next.round,
            to_act = next.current_player().map_or("-", |p| p.id.as_str()),
            "command applied"
        );
        room.state = next;
        self.broadcast(&room);
        Ok(())
    }

    /// Push a freshly derived masked view to every live connection in the room.
    pub(super) fn broadcast(&self, room: &Room) {
        for (conn_id, player_id) in &room.connections {
            let view = public_view(&room.state, player_id);
            if !self
                .registry
                .send(*conn_id, ServerMsg::GameState { state: view })
            {
                debug!(
                    room_id = %room.state.id,
                    %conn_id,
                    "dropping view for closed connection"
                );
            }
        }
    }
}
