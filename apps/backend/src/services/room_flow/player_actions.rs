use super::RoomFlowService;
use crate::domain::bidding::{self, Bid};
use crate::domain::tricks;
use crate::error::AppError;
use crate::services::rooms::ConnId;

impl RoomFlowService {
    /// Place a bid for the connection's seat.
    pub fn place_bid(&self, conn_id: ConnId, bid: Bid) -> Result<(), AppError> {
        self.run_mutation(conn_id, "place_bid", |state, player_id| {
            bidding::check_bid(state, player_id, bid)?;
            bidding::place_bid(state, player_id, bid)
        })
    }

    /// Play a card (by id, e.g. `"10H"`) for the connection's seat.
    pub fn play_card(&self, conn_id: ConnId, card_id: &str) -> Result<(), AppError> {
        self.run_mutation(conn_id, "play_card", |state, player_id| {
            tricks::check_play(state, player_id, card_id)?;
            tricks::play_card(state, player_id, card_id)
        })
    }
}
