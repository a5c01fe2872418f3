//! Room coordinator: maps connection commands onto engine transitions.
//!
//! Every command for a room runs validate → mutate → commit → fan-out while
//! holding that room's lock, so members observe commits in order and a
//! rejected command leaves the room untouched and unannounced.

mod mutation;
mod player_actions;
mod round_lifecycle;
mod seats;

use std::sync::Arc;

use crate::domain::state::GameState;
use crate::services::rooms::{RoomRegistry, RoomSummary};

/// Result of creating, joining or rejoining a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joined {
    pub room_id: String,
    pub player_id: String,
}

#[derive(Clone)]
pub struct RoomFlowService {
    registry: Arc<RoomRegistry>,
}

impl RoomFlowService {
    pub fn new(registry: Arc<RoomRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<RoomRegistry> {
        &self.registry
    }

    pub fn list_waiting_rooms(&self) -> Vec<RoomSummary> {
        self.registry.waiting_rooms()
    }

    /// Copy of a room's current snapshot.
    pub fn snapshot(&self, room_id: &str) -> Option<GameState> {
        self.registry
            .room(room_id)
            .map(|handle| handle.lock().state.clone())
    }
}
