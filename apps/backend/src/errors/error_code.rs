//! Error codes for the spades room server.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in websocket `error` messages and HTTP problem details.

use core::fmt;

use serde::{Serialize, Serializer};

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Command validation
    /// Action not allowed in the current phase
    PhaseMismatch,
    /// Not the acting player's turn
    OutOfTurn,
    /// Bid outside the legal range
    InvalidBid,
    /// Nil or blind nil not enabled / not yet allowed this round
    NilNotAllowed,
    /// Card not in the player's hand
    CardNotInHand,
    /// Must follow the led suit
    MustFollowSuit,
    /// Spades may not be led yet
    SpadesNotBroken,
    /// Unparsable card id
    ParseCard,
    /// Room configuration rejected
    InvalidConfig,
    /// Fewer seated players than needed to start
    NotEnoughPlayers,
    /// Connection is not seated in a room
    NotSeated,
    /// General validation error
    ValidationError,
    /// Malformed client message
    BadRequest,

    // Resource Not Found
    /// Unknown room id
    RoomNotFound,
    /// Unknown player id
    PlayerNotFound,

    // Room lifecycle conflicts
    /// All seats taken
    RoomFull,
    /// Game already left the waiting phase
    GameAlreadyStarted,
    /// Room code collision could not be resolved
    RoomCodeConflict,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::InvalidBid => "INVALID_BID",
            Self::NilNotAllowed => "NIL_NOT_ALLOWED",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::SpadesNotBroken => "SPADES_NOT_BROKEN",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::NotSeated => "NOT_SEATED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::RoomFull => "ROOM_FULL",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::RoomCodeConflict => "ROOM_CODE_CONFLICT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
