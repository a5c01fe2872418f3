//! Process-wide room and connection registry.
//!
//! Each room sits behind its own mutex; rooms never share a lock. The
//! connection maps are only touched by the room coordinator.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use rand::Rng;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::state::{GameState, Phase, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::ws::protocol::ServerMsg;

pub type ConnId = Uuid;
pub type Outbox = mpsc::UnboundedSender<ServerMsg>;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U
const MAX_CODE_ATTEMPTS: usize = 32;

/// One room: the authoritative snapshot plus the live connections seated in it.
#[derive(Debug)]
pub struct Room {
    pub state: GameState,
    pub connections: BTreeMap<ConnId, PlayerId>,
}

impl Room {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            connections: BTreeMap::new(),
        }
    }

    pub fn has_live_connection(&self, player_id: &str) -> bool {
        self.connections.values().any(|p| p == player_id)
    }
}

pub type RoomHandle = Arc<Mutex<Room>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub room_id: String,
    pub player_id: PlayerId,
}

/// Lobby listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub id: String,
    pub players: usize,
    pub max_players: u8,
}

/// Random room code from Crockford's base32 alphabet.
pub fn generate_room_code<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}

pub struct RoomRegistry {
    rooms: DashMap<String, RoomHandle>,
    memberships: DashMap<ConnId, Membership>,
    outboxes: DashMap<ConnId, Outbox>,
    code_len: usize,
}

impl RoomRegistry {
    pub fn new(code_len: usize) -> Self {
        Self {
            rooms: DashMap::new(),
            memberships: DashMap::new(),
            outboxes: DashMap::new(),
            code_len: code_len.max(1),
        }
    }

    pub fn register_connection(&self, conn_id: ConnId, outbox: Outbox) {
        self.outboxes.insert(conn_id, outbox);
    }

    /// Forget a connection entirely, returning the seat it held, if any.
    pub fn unregister_connection(&self, conn_id: ConnId) -> Option<Membership> {
        self.outboxes.remove(&conn_id);
        self.memberships.remove(&conn_id).map(|(_, m)| m)
    }

    pub fn bind(&self, conn_id: ConnId, membership: Membership) {
        self.memberships.insert(conn_id, membership);
    }

    pub fn unbind(&self, conn_id: ConnId) -> Option<Membership> {
        self.memberships.remove(&conn_id).map(|(_, m)| m)
    }

    pub fn membership(&self, conn_id: ConnId) -> Option<Membership> {
        self.memberships.get(&conn_id).map(|m| m.value().clone())
    }

    pub fn room(&self, room_id: &str) -> Option<RoomHandle> {
        self.rooms.get(room_id).map(|r| r.value().clone())
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Insert a new room under a fresh code; `build` receives the code.
    pub fn insert_room<F>(&self, build: F) -> Result<(String, RoomHandle), DomainError>
    where
        F: Fn(&str) -> Result<Room, DomainError>,
    {
        let mut rng = rand::rng();
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_room_code(self.code_len, &mut rng);
            match self.rooms.entry(code.clone()) {
                Entry::Occupied(_) => {
                    debug!(room_id = %code, "room code collision, retrying");
                }
                Entry::Vacant(slot) => {
                    let handle = Arc::new(Mutex::new(build(&code)?));
                    slot.insert(handle.clone());
                    return Ok((code, handle));
                }
            }
        }
        Err(DomainError::conflict(
            ConflictKind::RoomCodeConflict,
            "Could not allocate a free room code",
        ))
    }

    /// Push a message to one connection. Returns false if it is gone.
    pub fn send(&self, conn_id: ConnId, msg: ServerMsg) -> bool {
        let Some(outbox) = self.outboxes.get(&conn_id) else {
            return false;
        };
        outbox.send(msg).is_ok()
    }

    /// Waiting rooms, ordered by code.
    pub fn waiting_rooms(&self) -> Vec<RoomSummary> {
        let handles: Vec<(String, RoomHandle)> = self
            .rooms
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        let mut out: Vec<RoomSummary> = handles
            .into_iter()
            .filter_map(|(id, handle)| {
                let room = handle.lock();
                (room.state.phase == Phase::Waiting).then(|| RoomSummary {
                    id,
                    players: room.state.player_count(),
                    max_players: room.state.config.player_count,
                })
            })
            .collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(5)
    }
}
