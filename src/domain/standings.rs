//! Derived standings values: one row per team, one table per cutoff.

use crate::domain::TeamId;
use serde::{Deserialize, Serialize};

/// Aggregated season totals for one team at one cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// Team this row summarizes.
    pub team_id: TeamId,
    /// Display name, denormalized for presentation and preseason ordering.
    pub team_name: String,
    /// Matches counted at this cutoff. Always `won + drawn + lost`.
    pub played: u32,
    /// Wins.
    pub won: u32,
    /// Draws.
    pub drawn: u32,
    /// Losses.
    pub lost: u32,
    /// Goals scored.
    pub goals_for: u32,
    /// Goals conceded.
    pub goals_against: u32,
    /// 3 per win, 1 per draw, plus the registry adjustment when the
    /// cutoff is non-zero. May be negative.
    pub points: i64,
}

impl StandingsRow {
    /// A zeroed row for a team with no counted matches.
    pub fn zeroed(team_id: TeamId, team_name: impl Into<String>) -> Self {
        StandingsRow {
            team_id,
            team_name: team_name.into(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    /// Goal difference, recomputed from the goal totals on every call.
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// One ranked table: an immutable snapshot of the season at a cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsTable {
    /// Last matchweek included; 0 means before the season started.
    pub cutoff: u8,
    /// Rows in final table order, one per registered team.
    pub rows: Vec<StandingsRow>,
}

impl StandingsTable {
    /// The first-placed row, if any team is registered.
    pub fn leader(&self) -> Option<&StandingsRow> {
        self.rows.first()
    }

    /// The row for a team.
    pub fn row(&self, team: TeamId) -> Option<&StandingsRow> {
        self.rows.iter().find(|r| r.team_id == team)
    }

    /// 1-based league position of a team.
    pub fn position_of(&self, team: TeamId) -> Option<usize> {
        self.rows.iter().position(|r| r.team_id == team).map(|i| i + 1)
    }

    /// Ids of the first `k` teams in table order.
    pub fn top_k(&self, k: usize) -> Vec<TeamId> {
        self.rows.iter().take(k).map(|r| r.team_id).collect()
    }
}
