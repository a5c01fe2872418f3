// In-process connections for driving the room coordinator without a socket

use spades_backend::domain::player_view::PublicGameState;
use spades_backend::services::rooms::{ConnId, RoomRegistry};
use spades_backend::ws::protocol::ServerMsg;
use tokio::sync::mpsc;
use uuid::Uuid;

/// A registered connection whose outbox the test reads directly.
pub struct TestConn {
    pub id: ConnId,
    rx: mpsc::UnboundedReceiver<ServerMsg>,
}

impl TestConn {
    pub fn register(registry: &RoomRegistry) -> Self {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();
        registry.register_connection(id, tx);
        Self { id, rx }
    }

    /// Everything queued so far, in delivery order.
    pub fn drain(&mut self) -> Vec<ServerMsg> {
        let mut out = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            out.push(msg);
        }
        out
    }

    /// Only the game state views from the queue.
    pub fn drain_states(&mut self) -> Vec<PublicGameState> {
        self.drain()
            .into_iter()
            .filter_map(|msg| match msg {
                ServerMsg::GameState { state } => Some(state),
                _ => None,
            })
            .collect()
    }

    /// Most recent game state view, discarding everything before it.
    pub fn latest_state(&mut self) -> Option<PublicGameState> {
        self.drain_states().pop()
    }
}
