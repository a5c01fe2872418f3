use proptest::prelude::*;

use crate::domain::game_config::TeamMode;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{cards, config, pid, playing_with_hands};
use crate::domain::tricks::{check_play, is_valid_play, play_card, playable_cards, trick_winner};
use crate::domain::{test_gens, test_prelude, Card, Suit};
use crate::errors::domain::ValidationKind;

fn kind_of(result: Result<crate::domain::Card, crate::errors::domain::DomainError>) -> ValidationKind {
    result
        .unwrap_err()
        .validation_kind()
        .cloned()
        .unwrap_or(ValidationKind::Other("not a validation".into()))
}

#[test]
fn leader_cannot_lead_spades_until_broken() {
    let state = playing_with_hands(
        config(2, TeamMode::Individual),
        vec![cards(&["AS", "3H"]), cards(&["2C", "4C"])],
        0,
    );
    assert_eq!(playable_cards(&state, &pid(0)), cards(&["3H"]));
    assert_eq!(
        kind_of(check_play(&state, &pid(0), "AS")),
        ValidationKind::SpadesNotBroken
    );

    let mut broken = state.clone();
    broken.spades_broken = true;
    assert!(is_valid_play(&broken, &pid(0), "AS"));
}

#[test]
fn all_spade_hand_may_lead_spades() {
    let state = playing_with_hands(
        config(2, TeamMode::Individual),
        vec![cards(&["2S", "KS"]), cards(&["2C", "4C"])],
        0,
    );
    assert_eq!(playable_cards(&state, &pid(0)), cards(&["2S", "KS"]));
    assert!(is_valid_play(&state, &pid(0), "2S"));
}

#[test]
fn follower_must_follow_suit_when_able() {
    let state = playing_with_hands(
        config(2, TeamMode::Individual),
        vec![cards(&["AH", "3C"]), cards(&["5H", "KS", "2D"])],
        0,
    );
    let s = play_card(&state, &pid(0), "AH").unwrap();
    assert_eq!(s.current_player_index, 1);
    assert_eq!(playable_cards(&s, &pid(1)), cards(&["5H"]));
    assert_eq!(
        kind_of(check_play(&s, &pid(1), "KS")),
        ValidationKind::MustFollowSuit
    );
}

#[test]
fn void_follower_may_trump_and_the_spade_wins() {
    let state = playing_with_hands(
        config(2, TeamMode::Individual),
        vec![cards(&["AD", "3C"]), cards(&["2S", "5C"])],
        0,
    );
    let s = play_card(&state, &pid(0), "AD").unwrap();
    assert_eq!(playable_cards(&s, &pid(1)).len(), 2);
    let s = play_card(&s, &pid(1), "2S").unwrap();

    assert!(s.spades_broken);
    assert!(s.current_trick.is_empty());
    assert_eq!(s.completed_tricks.len(), 1);
    let trick = &s.completed_tricks[0];
    assert_eq!(trick.winner_id, pid(1));
    assert_eq!(trick.lead_suit, Suit::Diamonds);
    assert_eq!(s.current_player_index, 1, "winner leads next trick");
    assert_eq!(s.phase, Phase::Playing);
}

#[test]
fn highest_lead_suit_card_wins_a_plain_trick() {
    let state = playing_with_hands(
        config(3, TeamMode::Individual),
        vec![cards(&["10H"]), cards(&["KH"]), cards(&["3H"])],
        0,
    );
    let s = play_card(&state, &pid(0), "10H").unwrap();
    let s = play_card(&s, &pid(1), "KH").unwrap();
    let s = play_card(&s, &pid(2), "3H").unwrap();

    assert_eq!(s.completed_tricks[0].winner_id, pid(1));
    assert_eq!(s.current_player_index, 1);
    assert_eq!(s.phase, Phase::Scoring, "empty hands score the round");
    assert_eq!(s.team_scores[1].round_scores, vec![1]);
    assert_eq!(s.team_scores[1].bags, 1);
}

#[test]
fn off_suit_cards_never_win() {
    let plays: Vec<_> = ["4D", "AC", "5D"]
        .iter()
        .enumerate()
        .map(|(i, id)| crate::domain::state::TrickCard {
            player_id: pid(i),
            card: id.parse().unwrap(),
        })
        .collect();
    assert_eq!(trick_winner(&plays).unwrap().player_id, pid(2));
    assert!(trick_winner(&[]).is_none());
}

#[test]
fn rejects_unknown_or_unheld_cards_and_wrong_turns() {
    let state = playing_with_hands(
        config(2, TeamMode::Individual),
        vec![cards(&["AH", "3C"]), cards(&["5H", "KS"])],
        0,
    );
    assert_eq!(
        kind_of(check_play(&state, &pid(0), "ZZ")),
        ValidationKind::ParseCard
    );
    assert_eq!(
        kind_of(check_play(&state, &pid(0), "5H")),
        ValidationKind::CardNotInHand
    );
    assert_eq!(
        kind_of(check_play(&state, &pid(1), "5H")),
        ValidationKind::OutOfTurn
    );

    let mut bidding = state.clone();
    bidding.phase = Phase::Bidding;
    assert_eq!(
        kind_of(check_play(&bidding, &pid(0), "AH")),
        ValidationKind::PhaseMismatch
    );
    assert!(playable_cards(&bidding, &pid(0)).is_empty());
}

#[test]
fn play_removes_the_card_and_leaves_the_input_alone() {
    let state = playing_with_hands(
        config(2, TeamMode::Individual),
        vec![cards(&["AH", "3C"]), cards(&["5H", "KS"])],
        0,
    );
    let before = state.clone();
    let s = play_card(&state, &pid(0), "AH").unwrap();
    assert_eq!(s.hand(&pid(0)), cards(&["3C"]).as_slice());
    assert_eq!(s.current_trick.len(), 1);
    assert_eq!(state, before);
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Play validation never touches the state and agrees with `check_play`
    /// and `playable_cards`, both on the lead and mid-trick.
    #[test]
    fn prop_play_validation_is_pure(
        deck in test_gens::unique_cards(8),
        card in test_gens::card(),
        seat in 0usize..4,
        leader in 0usize..4,
        spades_broken in any::<bool>(),
    ) {
        let hands: Vec<Vec<Card>> = deck.chunks(2).map(<[Card]>::to_vec).collect();
        let mut led = playing_with_hands(config(4, TeamMode::Individual), hands, leader);
        led.spades_broken = spades_broken;
        let lead = playable_cards(&led, &pid(leader))[0];
        let mid_trick = play_card(&led, &pid(leader), &lead.id()).unwrap();

        for state in [&led, &mid_trick] {
            let before = state.clone();
            let player = pid(seat);
            let first = is_valid_play(state, &player, &card.id());
            let second = is_valid_play(state, &player, &card.id());
            let checked = check_play(state, &player, &card.id());

            prop_assert_eq!(first, second);
            prop_assert_eq!(first, checked.is_ok());
            prop_assert_eq!(state, &before);
            let expected = seat == state.current_player_index
                && playable_cards(state, &player).contains(&card);
            prop_assert_eq!(first, expected);
        }
    }
}
