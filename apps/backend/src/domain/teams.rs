//! Team formation for any table size.

use crate::domain::game_config::TeamMode;
use crate::domain::state::{Player, TeamScore};

/// Number of scoring teams for a table.
///
/// `individual` → one per player; an explicit `num_teams > 0` wins otherwise;
/// `two_teams` → 2; anything else → 3.
pub fn team_count(mode: TeamMode, player_count: usize, num_teams: Option<u8>) -> usize {
    if mode == TeamMode::Individual {
        return player_count;
    }
    match num_teams {
        Some(n) if n > 0 => n as usize,
        _ => match mode {
            TeamMode::TwoTeams => 2,
            TeamMode::Individual | TeamMode::ThreeTeams => 3,
        },
    }
}

pub fn make_team_scores(count: usize) -> Vec<TeamScore> {
    vec![TeamScore::default(); count]
}

/// Recompute every player's team from seat order.
///
/// Individual mode puts each seat on its own team; otherwise seats rotate
/// through the teams (`seat mod team_count`), so partners sit apart.
pub fn assign_teams(
    players: &[Player],
    mode: TeamMode,
    player_count: usize,
    num_teams: Option<u8>,
) -> Vec<Player> {
    let teams = team_count(mode, player_count, num_teams).max(1);
    players
        .iter()
        .map(|p| Player {
            team_index: match mode {
                TeamMode::Individual => p.seat_index,
                TeamMode::TwoTeams | TeamMode::ThreeTeams => p.seat_index % teams,
            },
            ..p.clone()
        })
        .collect()
}
