use super::RoomFlowService;
use crate::domain::round_lifecycle;
use crate::domain::state::{require_phase, Phase};
use crate::error::AppError;
use crate::services::rooms::ConnId;

impl RoomFlowService {
    /// Leave the lobby: fix teams and deal round 1. Any seated player may start.
    pub fn start_game(&self, conn_id: ConnId) -> Result<(), AppError> {
        self.run_mutation(conn_id, "start_game", |state, _player_id| {
            round_lifecycle::start_game(state)
        })
    }

    /// Deal the next round once the current one has been scored.
    pub fn next_round(&self, conn_id: ConnId) -> Result<(), AppError> {
        self.run_mutation(conn_id, "next_round", |state, _player_id| {
            require_phase(state, Phase::Scoring, "next_round")?;
            round_lifecycle::start_next_round(state)
        })
    }
}
