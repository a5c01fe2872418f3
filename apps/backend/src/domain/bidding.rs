use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::rules::{valid_bid_range, NIL_MIN_ROUND};
use crate::domain::state::{next_seat, require_phase, require_turn, round_start_seat, GameState, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

/// A player's bid for the round.
///
/// Wire form: a number, `"nil"` or `"blind_nil"`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Bid {
    Numeric(u8),
    Nil,
    BlindNil,
}

impl Bid {
    pub fn numeric_value(self) -> Option<u8> {
        match self {
            Bid::Numeric(n) => Some(n),
            Bid::Nil | Bid::BlindNil => None,
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bid::Numeric(n) => write!(f, "{n}"),
            Bid::Nil => write!(f, "nil"),
            Bid::BlindNil => write!(f, "blind_nil"),
        }
    }
}

impl Serialize for Bid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Bid::Numeric(n) => serializer.serialize_u8(*n),
            Bid::Nil => serializer.serialize_str("nil"),
            Bid::BlindNil => serializer.serialize_str("blind_nil"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BidRepr {
    Number(u8),
    Word(String),
}

impl<'de> Deserialize<'de> for Bid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match BidRepr::deserialize(deserializer)? {
            BidRepr::Number(n) => Ok(Bid::Numeric(n)),
            BidRepr::Word(w) => match w.as_str() {
                "nil" => Ok(Bid::Nil),
                "blind_nil" => Ok(Bid::BlindNil),
                _ => Err(serde::de::Error::custom(format!("Invalid bid: {w}"))),
            },
        }
    }
}

/// Shape check against the room's rules, ignoring phase and turn.
fn check_bid_shape(state: &GameState, bid: Bid) -> Result<(), DomainError> {
    match bid {
        Bid::Numeric(n) => {
            let range = valid_bid_range(state.round);
            if !range.contains(&n) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidBid,
                    format!("Bid must be in range {range:?}"),
                ));
            }
        }
        Bid::Nil => {
            if !state.config.allow_nil {
                return Err(DomainError::validation(
                    ValidationKind::NilNotAllowed,
                    "Nil bids are disabled for this room",
                ));
            }
            if state.round < NIL_MIN_ROUND {
                return Err(DomainError::validation(
                    ValidationKind::NilNotAllowed,
                    format!("Nil is allowed from round {NIL_MIN_ROUND}"),
                ));
            }
        }
        Bid::BlindNil => {
            if !(state.config.allow_nil && state.config.allow_blind_nil) {
                return Err(DomainError::validation(
                    ValidationKind::NilNotAllowed,
                    "Blind nil bids are disabled for this room",
                ));
            }
            if state.round < NIL_MIN_ROUND {
                return Err(DomainError::validation(
                    ValidationKind::NilNotAllowed,
                    format!("Blind nil is allowed from round {NIL_MIN_ROUND}"),
                ));
            }
        }
    }
    Ok(())
}

/// Full legality check for a bid: phase, strict turn order, shape.
pub fn check_bid(state: &GameState, player_id: &str, bid: Bid) -> Result<(), DomainError> {
    require_phase(state, Phase::Bidding, "place_bid")?;
    require_turn(state, player_id)?;
    check_bid_shape(state, bid)
}

pub fn is_valid_bid(state: &GameState, player_id: &str, bid: Bid) -> bool {
    check_bid(state, player_id, bid).is_ok()
}

/// Every bid the player could legally place right now (empty when not their turn).
pub fn legal_bids(state: &GameState, player_id: &str) -> Vec<Bid> {
    let candidates = valid_bid_range(state.round)
        .map(Bid::Numeric)
        .chain([Bid::Nil, Bid::BlindNil]);
    candidates
        .filter(|b| is_valid_bid(state, player_id, *b))
        .collect()
}

/// Record a bid and advance the turn; the last bid moves the game to `playing`
/// with the seat left of the dealer leading.
pub fn place_bid(state: &GameState, player_id: &str, bid: Bid) -> Result<GameState, DomainError> {
    check_bid(state, player_id, bid)?;

    let n = state.player_count();
    let mut next = state.clone();
    next.bids.insert(player_id.to_string(), Some(bid));

    let all_bid = next
        .players
        .iter()
        .all(|p| matches!(next.bids.get(&p.id), Some(Some(_))));

    if all_bid {
        next.phase = Phase::Playing;
        next.current_player_index = round_start_seat(next.dealer_index, n);
    } else {
        next.current_player_index = next_seat(next.current_player_index, n);
    }
    Ok(next)
}
