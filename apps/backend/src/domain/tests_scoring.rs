use crate::domain::bidding::Bid;
use crate::domain::game_config::TeamMode;
use crate::domain::scoring::{calculate_round_score, score_team, TeamRoundOutcome};
use crate::domain::state::{GameState, Phase, Trick, TrickCard};
use crate::domain::test_state_helpers::{config, pid, playing_with_hands};
use crate::domain::{Card, Rank, Suit};

fn won_tricks(state: &mut GameState, seat: usize, count: usize) {
    for _ in 0..count {
        state.completed_tricks.push(Trick {
            cards: vec![TrickCard {
                player_id: pid(seat),
                card: Card::new(Rank::Two, Suit::Clubs),
            }],
            winner_id: pid(seat),
            lead_suit: Suit::Clubs,
        });
    }
}

/// Four seats, two teams (0/2 vs 1/3), hands already played out.
fn scored_table(round: u8, bids: [Bid; 4], tricks: [usize; 4]) -> GameState {
    let mut state = playing_with_hands(
        config(4, TeamMode::TwoTeams),
        vec![Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        0,
    );
    state.round = round;
    for (seat, bid) in bids.into_iter().enumerate() {
        state.bids.insert(pid(seat), Some(bid));
    }
    for (seat, count) in tricks.into_iter().enumerate() {
        won_tricks(&mut state, seat, count);
    }
    state
}

#[test]
fn made_bid_scores_ten_per_trick_without_bags() {
    let out = score_team(&[(Some(Bid::Numeric(2)), 3), (Some(Bid::Numeric(2)), 1)]);
    assert_eq!(
        out,
        TeamRoundOutcome {
            bid: 4,
            tricks: 4,
            new_bags: 0,
            delta: 40
        }
    );
}

#[test]
fn overtricks_score_one_point_and_become_bags() {
    let out = score_team(&[(Some(Bid::Numeric(3)), 4), (Some(Bid::Numeric(1)), 2)]);
    assert_eq!(out.delta, 42);
    assert_eq!(out.new_bags, 2);
    assert_eq!(out.tricks, 6);
}

#[test]
fn set_bid_loses_ten_per_bid_trick() {
    let out = score_team(&[(Some(Bid::Numeric(3)), 1), (Some(Bid::Numeric(2)), 1)]);
    assert_eq!(out.delta, -50);
    assert_eq!(out.new_bags, 0);
}

#[test]
fn successful_nil_adds_fifty_and_no_tricks() {
    let out = score_team(&[(Some(Bid::Nil), 0), (Some(Bid::Numeric(3)), 3)]);
    assert_eq!(out.delta, 50 + 30);
    assert_eq!(out.tricks, 3);
    assert_eq!(out.new_bags, 0);
}

#[test]
fn failed_nil_tricks_are_bags_not_bid_tricks() {
    // Partner bid 3 but took only 2; the nil bidder's 2 tricks do not rescue it.
    let out = score_team(&[(Some(Bid::Nil), 2), (Some(Bid::Numeric(3)), 2)]);
    assert_eq!(out.delta, -50 + 2 - 30);
    assert_eq!(out.tricks, 4);
    assert_eq!(out.new_bags, 2);
}

#[test]
fn blind_nil_is_worth_one_hundred() {
    assert_eq!(score_team(&[(Some(Bid::BlindNil), 0)]).delta, 100);
    assert_eq!(score_team(&[(Some(Bid::BlindNil), 1)]).delta, -100 + 1);
}

#[test]
fn round_score_updates_every_team_and_moves_to_scoring() {
    let state = scored_table(
        4,
        [Bid::Numeric(2), Bid::Numeric(1), Bid::Numeric(2), Bid::Numeric(0)],
        [2, 0, 2, 0],
    );
    let scored = calculate_round_score(&state);

    assert_eq!(scored.phase, Phase::Scoring);
    assert_eq!(scored.winner, None);
    assert_eq!(scored.team_scores[0].score, 40);
    assert_eq!(scored.team_scores[0].bids, 4);
    assert_eq!(scored.team_scores[0].tricks, 4);
    assert_eq!(scored.team_scores[1].score, -10);
    assert_eq!(scored.team_scores[0].round_scores, vec![40]);
    assert_eq!(scored.team_scores[1].round_scores, vec![-10]);
}

#[test]
fn third_bag_costs_thirty_and_keeps_the_remainder() {
    let mut state = scored_table(
        4,
        [Bid::Numeric(1), Bid::Numeric(0), Bid::Numeric(1), Bid::Numeric(0)],
        [2, 0, 2, 0],
    );
    state.team_scores[0].bags = 2;
    state.team_scores[0].score = 100;
    let scored = calculate_round_score(&state);

    // +22 for the round, 4 bags total: one penalty, one bag carried.
    assert_eq!(scored.team_scores[0].round_scores, vec![22]);
    assert_eq!(scored.team_scores[0].score, 100 + 22 - 30);
    assert_eq!(scored.team_scores[0].bags, 1);
}

#[test]
fn only_the_last_round_finishes_the_game() {
    for round in 1..13 {
        let state = scored_table(round, [Bid::Numeric(0); 4], [0, 0, 0, 0]);
        let scored = calculate_round_score(&state);
        assert_eq!(scored.phase, Phase::Scoring, "round {round}");
        assert_eq!(scored.winner, None);
    }

    let state = scored_table(
        13,
        [Bid::Numeric(3), Bid::Numeric(3), Bid::Numeric(4), Bid::Numeric(3)],
        [3, 3, 4, 3],
    );
    let scored = calculate_round_score(&state);
    assert_eq!(scored.phase, Phase::Finished);
    assert_eq!(scored.winner, Some(0));
}

#[test]
fn exact_tie_goes_to_the_lower_team_index() {
    let state = scored_table(13, [Bid::Numeric(2); 4], [2, 2, 2, 2]);
    let scored = calculate_round_score(&state);
    assert_eq!(scored.team_scores[0].score, scored.team_scores[1].score);
    assert_eq!(scored.winner, Some(0));
    assert_eq!(scored.leading_teams(), vec![0, 1]);
}

#[test]
fn round_scores_grow_by_one_entry_per_round() {
    let mut state = scored_table(1, [Bid::Numeric(0); 4], [1, 0, 0, 0]);
    for round in 1..=3u8 {
        state.round = round;
        state = calculate_round_score(&state);
        for team in &state.team_scores {
            assert_eq!(team.round_scores.len(), round as usize);
        }
    }
}
