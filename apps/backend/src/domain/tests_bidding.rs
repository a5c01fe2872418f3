use crate::domain::bidding::{check_bid, is_valid_bid, legal_bids, place_bid, Bid};
use crate::domain::game_config::{GameConfig, TeamMode};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{config, pid, started};
use crate::errors::domain::{DomainError, ValidationKind};

fn four_player_round(round: u8) -> crate::domain::state::GameState {
    let mut state = started(config(4, TeamMode::TwoTeams), 4, 11);
    state.round = round;
    state
}

fn kind(err: DomainError) -> ValidationKind {
    err.validation_kind().cloned().unwrap_or(ValidationKind::Other("not a validation".into()))
}

#[test]
fn first_bidder_is_left_of_dealer_and_turns_advance_one_seat() {
    let state = four_player_round(1);
    assert_eq!(state.dealer_index, 0);
    assert_eq!(state.current_player_index, 1);

    let s1 = place_bid(&state, &pid(1), Bid::Numeric(1)).unwrap();
    assert_eq!(s1.current_player_index, 2);
    assert_eq!(s1.phase, Phase::Bidding);
    let s2 = place_bid(&s1, &pid(2), Bid::Numeric(0)).unwrap();
    let s3 = place_bid(&s2, &pid(3), Bid::Numeric(1)).unwrap();
    assert_eq!(s3.current_player_index, 0);
    let done = place_bid(&s3, &pid(0), Bid::Numeric(0)).unwrap();

    assert_eq!(done.phase, Phase::Playing);
    assert_eq!(done.current_player_index, 1, "lead seat is left of the dealer");
    assert_eq!(done.bid_of(&pid(1)), Some(Bid::Numeric(1)));
    assert_eq!(done.hands, state.hands, "bidding never touches hands");
}

#[test]
fn out_of_turn_bid_is_rejected_without_change() {
    let state = four_player_round(1);
    let before = state.clone();
    let err = place_bid(&state, &pid(2), Bid::Numeric(0)).unwrap_err();
    assert_eq!(kind(err), ValidationKind::OutOfTurn);
    assert!(!is_valid_bid(&state, &pid(2), Bid::Numeric(0)));
    assert_eq!(state, before);

    let err = check_bid(&state, "ghost", Bid::Numeric(0)).unwrap_err();
    assert_eq!(kind(err), ValidationKind::NotSeated);
}

#[test]
fn numeric_bid_above_round_is_invalid() {
    let state = four_player_round(3);
    assert!(is_valid_bid(&state, &pid(1), Bid::Numeric(3)));
    let err = check_bid(&state, &pid(1), Bid::Numeric(5)).unwrap_err();
    assert_eq!(kind(err), ValidationKind::InvalidBid);
}

#[test]
fn nil_needs_round_two_and_the_room_flag() {
    let round_one = four_player_round(1);
    let err = check_bid(&round_one, &pid(1), Bid::Nil).unwrap_err();
    assert_eq!(kind(err), ValidationKind::NilNotAllowed);

    let round_two = four_player_round(2);
    assert!(is_valid_bid(&round_two, &pid(1), Bid::Nil));

    let mut no_nil = round_two.clone();
    no_nil.config.allow_nil = false;
    assert_eq!(
        kind(check_bid(&no_nil, &pid(1), Bid::Nil).unwrap_err()),
        ValidationKind::NilNotAllowed
    );
}

#[test]
fn blind_nil_needs_its_own_flag() {
    let mut state = four_player_round(2);
    assert!(!is_valid_bid(&state, &pid(1), Bid::BlindNil));
    state.config = GameConfig {
        allow_blind_nil: true,
        ..state.config.clone()
    };
    assert!(is_valid_bid(&state, &pid(1), Bid::BlindNil));
    state.config.allow_nil = false;
    assert!(!is_valid_bid(&state, &pid(1), Bid::BlindNil));
}

#[test]
fn legal_bids_lists_only_what_place_bid_accepts() {
    let state = four_player_round(2);
    assert_eq!(
        legal_bids(&state, &pid(1)),
        vec![Bid::Numeric(0), Bid::Numeric(1), Bid::Numeric(2), Bid::Nil]
    );
    assert!(legal_bids(&state, &pid(0)).is_empty());
    for bid in legal_bids(&state, &pid(1)) {
        assert!(place_bid(&state, &pid(1), bid).is_ok());
    }
}

#[test]
fn bidding_is_rejected_outside_the_bidding_phase() {
    let mut state = four_player_round(1);
    state.phase = Phase::Playing;
    let err = place_bid(&state, &pid(1), Bid::Numeric(0)).unwrap_err();
    assert_eq!(kind(err), ValidationKind::PhaseMismatch);
}

#[test]
fn bid_wire_format() {
    assert_eq!(serde_json::to_string(&Bid::Numeric(3)).unwrap(), "3");
    assert_eq!(serde_json::to_string(&Bid::Nil).unwrap(), "\"nil\"");
    assert_eq!(serde_json::to_string(&Bid::BlindNil).unwrap(), "\"blind_nil\"");
    assert_eq!(serde_json::from_str::<Bid>("0").unwrap(), Bid::Numeric(0));
    assert_eq!(serde_json::from_str::<Bid>("\"nil\"").unwrap(), Bid::Nil);
    assert_eq!(
        serde_json::from_str::<Bid>("\"blind_nil\"").unwrap(),
        Bid::BlindNil
    );
    assert!(serde_json::from_str::<Bid>("\"pass\"").is_err());
    assert!(serde_json::from_str::<Bid>("-1").is_err());
}
