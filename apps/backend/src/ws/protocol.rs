use serde::{Deserialize, Serialize};

use crate::domain::bidding::Bid;
use crate::domain::game_config::PartialGameConfig;
use crate::domain::player_view::PublicGameState;
use crate::errors::ErrorCode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    CreateRoom {
        player_name: String,
        #[serde(default)]
        config: PartialGameConfig,
    },
    JoinRoom {
        room_id: String,
        player_name: String,
    },
    RejoinRoom {
        room_id: String,
        player_id: String,
    },
    StartGame,
    PlaceBid {
        bid: Bid,
    },
    PlayCard {
        card_id: String,
    },
    NextRound,
}

impl ClientMsg {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientMsg::CreateRoom { .. } => "create_room",
            ClientMsg::JoinRoom { .. } => "join_room",
            ClientMsg::RejoinRoom { .. } => "rejoin_room",
            ClientMsg::StartGame => "start_game",
            ClientMsg::PlaceBid { .. } => "place_bid",
            ClientMsg::PlayCard { .. } => "play_card",
            ClientMsg::NextRound => "next_round",
        }
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    JoinedRoom {
        room_id: String,
        player_id: String,
    },

    GameState {
        state: PublicGameState,
    },

    Error {
        code: ErrorCode,
        message: String,
    },
}
