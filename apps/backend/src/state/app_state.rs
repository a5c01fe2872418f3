use std::sync::Arc;

use crate::config::server::ServerConfig;
use crate::services::room_flow::RoomFlowService;
use crate::services::rooms::RoomRegistry;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Room coordinator; owns the process-wide registry
    pub rooms: RoomFlowService,
    pub config: ServerConfig,
}

impl AppState {
    /// Build state with a fresh, empty registry.
    pub fn new(config: ServerConfig) -> Self {
        let registry = Arc::new(RoomRegistry::new(config.room_code_len));
        Self {
            rooms: RoomFlowService::new(registry),
            config,
        }
    }

    pub fn registry(&self) -> &Arc<RoomRegistry> {
        self.rooms.registry()
    }

    /// Default config, empty registry.
    pub fn for_tests() -> Self {
        Self::new(ServerConfig::default())
    }
}
