use std::ops::RangeInclusive;

pub const DECK_SIZE: usize = 52;
pub const TOTAL_ROUNDS: u8 = 13;
pub const MIN_PLAYERS: u8 = 2;
/// Largest table for which round 13 can still be dealt from one deck.
pub const MAX_PLAYERS: u8 = (DECK_SIZE / TOTAL_ROUNDS as usize) as u8;

pub const POINTS_PER_BID_TRICK: i32 = 10;
pub const NIL_BONUS: i32 = 50;
pub const BLIND_NIL_BONUS: i32 = 100;
pub const BAGS_PER_PENALTY: u32 = 3;
pub const BAG_PENALTY: i32 = 30;
/// Nil needs at least two cards in hand to be a real choice.
pub const NIL_MIN_ROUND: u8 = 2;

/// Round N deals N cards to every player.
pub fn hand_size_for_round(round_no: u8) -> Option<u8> {
    if round_no == 0 || round_no > TOTAL_ROUNDS {
        return None;
    }
    Some(round_no)
}

pub fn valid_bid_range(hand_size: u8) -> RangeInclusive<u8> {
    0..=hand_size
}
