//! Per-room game configuration, fixed at room creation.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::teams::team_count;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamMode {
    /// Everyone for themselves.
    Individual,
    TwoTeams,
    ThreeTeams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: u8,
    pub team_mode: TeamMode,
    /// Explicit team count; overrides the team mode's default when > 0.
    #[serde(default)]
    pub num_teams: Option<u8>,
    pub allow_nil: bool,
    #[serde(default)]
    pub allow_blind_nil: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            team_mode: TeamMode::TwoTeams,
            num_teams: None,
            allow_nil: true,
            allow_blind_nil: false,
        }
    }
}

/// Client-supplied overrides, merged over `GameConfig::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialGameConfig {
    pub player_count: Option<u8>,
    pub team_mode: Option<TeamMode>,
    pub num_teams: Option<u8>,
    pub allow_nil: Option<bool>,
    pub allow_blind_nil: Option<bool>,
}

impl PartialGameConfig {
    pub fn into_config(self) -> GameConfig {
        let base = GameConfig::default();
        GameConfig {
            player_count: self.player_count.unwrap_or(base.player_count),
            team_mode: self.team_mode.unwrap_or(base.team_mode),
            num_teams: self.num_teams.or(base.num_teams),
            allow_nil: self.allow_nil.unwrap_or(base.allow_nil),
            allow_blind_nil: self.allow_blind_nil.unwrap_or(base.allow_blind_nil),
        }
    }
}

impl GameConfig {
    /// Team count for the full configured table.
    pub fn team_count(&self) -> usize {
        team_count(self.team_mode, self.player_count as usize, self.num_teams)
    }

    /// Reject tables the fixed 13-round schedule cannot deal from one deck,
    /// and team layouts that would leave a team without members.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!(
                    "Player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {}",
                    self.player_count
                ),
            ));
        }
        let teams = self.team_count();
        if teams == 0 || teams > self.player_count as usize {
            return Err(DomainError::validation(
                ValidationKind::InvalidTeamCount,
                format!(
                    "{teams} teams cannot be formed from {} players",
                    self.player_count
                ),
            ));
        }
        if self.allow_blind_nil && !self.allow_nil {
            return Err(DomainError::validation_other(
                "Blind nil requires nil bids to be enabled",
            ));
        }
        Ok(())
    }
}
