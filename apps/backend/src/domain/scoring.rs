use crate::domain::bidding::Bid;
use crate::domain::rules::{
    BAGS_PER_PENALTY, BAG_PENALTY, BLIND_NIL_BONUS, NIL_BONUS, POINTS_PER_BID_TRICK, TOTAL_ROUNDS,
};
use crate::domain::state::{GameState, Phase, TeamIndex};

/// One team's result for a finished round, before bag penalties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRoundOutcome {
    /// Combined numeric bid.
    pub bid: u32,
    /// All tricks taken by the team, nil bidders included.
    pub tricks: u32,
    pub new_bags: u32,
    pub delta: i32,
}

/// Score one team's round from its members' bids and tricks.
///
/// Numeric bidders pool bids and tricks: made → `bid * 10` plus one point per
/// overtrick (a bag); set → `-bid * 10`. Each nil scores ±50 (blind nil ±100)
/// on its own, and tricks taken on a failed nil are bags worth one point each.
pub fn score_team(members: &[(Option<Bid>, u32)]) -> TeamRoundOutcome {
    let mut out = TeamRoundOutcome::default();
    let mut bid_tricks: u32 = 0;

    for &(bid, tricks) in members {
        out.tricks += tricks;
        let bonus = match bid {
            Some(Bid::Nil) => NIL_BONUS,
            Some(Bid::BlindNil) => BLIND_NIL_BONUS,
            Some(Bid::Numeric(n)) => {
                out.bid += u32::from(n);
                bid_tricks += tricks;
                continue;
            }
            None => {
                bid_tricks += tricks;
                continue;
            }
        };
        if tricks == 0 {
            out.delta += bonus;
        } else {
            out.delta -= bonus;
            out.delta += tricks as i32;
            out.new_bags += tricks;
        }
    }

    if bid_tricks >= out.bid {
        let over = bid_tricks - out.bid;
        out.delta += out.bid as i32 * POINTS_PER_BID_TRICK + over as i32;
        out.new_bags += over;
    } else {
        out.delta -= out.bid as i32 * POINTS_PER_BID_TRICK;
    }
    out
}

/// Score the finished round for every team and move to `scoring`, or to
/// `finished` with a winner after the last round.
pub fn calculate_round_score(state: &GameState) -> GameState {
    let mut next = state.clone();

    for (team, entry) in next.team_scores.iter_mut().enumerate() {
        let members: Vec<(Option<Bid>, u32)> = state
            .players
            .iter()
            .filter(|p| p.team_index == team)
            .map(|p| (state.bid_of(&p.id), state.tricks_won(&p.id)))
            .collect();
        let outcome = score_team(&members);

        entry.bids = outcome.bid;
        entry.tricks = outcome.tricks;
        entry.round_scores.push(outcome.delta);
        entry.score += outcome.delta;
        entry.bags += outcome.new_bags;

        let penalties = entry.bags / BAGS_PER_PENALTY;
        entry.score -= penalties as i32 * BAG_PENALTY;
        entry.bags %= BAGS_PER_PENALTY;
    }

    if state.round >= TOTAL_ROUNDS {
        next.phase = Phase::Finished;
        next.winner = first_leader(&next);
    } else {
        next.phase = Phase::Scoring;
        next.winner = None;
    }
    next
}

/// Lowest-index team holding the top score.
fn first_leader(state: &GameState) -> Option<TeamIndex> {
    state.leading_teams().first().copied()
}
